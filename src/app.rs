use crate::config::Config;
use crate::logic::StrategyAdvisor;
use crate::models::{
    Circuit, PitAdvice, StintHistory, StrategyLogEntry, TelemetrySnapshot, TireCompound,
    TrackWeather, CIRCUITS,
};
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Circuits,
    Log,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Dashboard),
            '2' => Some(Screen::Circuits),
            '3' => Some(Screen::Log),
            _ => None,
        }
    }
}

pub struct CircuitsState {
    pub selected_index: usize,
}

impl CircuitsState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct LogState {
    pub selected_index: usize,
}

impl LogState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,

    // Session state
    pub circuit_index: Option<usize>,
    pub telemetry: TelemetrySnapshot,
    pub stint_history: StintHistory,
    pub weather: TrackWeather,
    pub advice: Option<PitAdvice>,
    pub log: Vec<StrategyLogEntry>,

    // Screen states
    pub circuits_state: CircuitsState,
    pub log_state: LogState,

    // Services
    pub advisor: StrategyAdvisor,

    // UI state
    pub status_message: Option<String>,
    pub needs_weather_refresh: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let advisor = StrategyAdvisor::new(config.calibration.clone());
        Self {
            screen: Screen::Dashboard,
            should_quit: false,
            config,
            circuit_index: None,
            telemetry: TelemetrySnapshot::default(),
            stint_history: StintHistory::starting_on(TireCompound::Soft),
            weather: TrackWeather::default(),
            advice: None,
            log: Vec::new(),
            circuits_state: CircuitsState::new(),
            log_state: LogState::new(),
            advisor,
            status_message: None,
            needs_weather_refresh: false,
        }
    }

    pub fn current_circuit(&self) -> Option<&'static Circuit> {
        self.circuit_index.and_then(|i| CIRCUITS.get(i))
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    /// Pick a venue and queue a weather fetch for its coordinates.
    pub fn select_circuit(&mut self, index: usize) {
        if index < CIRCUITS.len() {
            self.circuit_index = Some(index);
            self.advice = None;
            self.request_weather_refresh();
        }
    }

    pub fn request_weather_refresh(&mut self) {
        if self.config.weather.enabled && self.circuit_index.is_some() {
            self.needs_weather_refresh = true;
            self.set_status("Fetching weather...");
        }
    }

    pub fn update_weather(&mut self, weather: TrackWeather) {
        self.weather = weather;
    }

    pub fn adjust_tire_age(&mut self, delta: f64) {
        self.telemetry.tire_age_laps = (self.telemetry.tire_age_laps + delta).clamp(0.0, 80.0);
    }

    pub fn cycle_compound(&mut self) {
        self.telemetry.compound = self.telemetry.compound.cycle();
    }

    pub fn toggle_caution(&mut self) {
        self.telemetry.caution_active = !self.telemetry.caution_active;
    }

    /// Confirm a pit stop: the tire coming off joins the stint history and
    /// the fresh set starts at age zero.
    pub fn confirm_pit_stop(&mut self) {
        self.stint_history.record(self.telemetry.compound);
        self.telemetry.tire_age_laps = 0.0;
        self.advice = None;
        self.set_status("Pit stop recorded");
    }

    /// Drop the most recent stint record, for correcting a mis-entered pit.
    pub fn remove_last_stint(&mut self) {
        if !self.stint_history.is_empty() {
            self.stint_history.remove(self.stint_history.len() - 1);
            self.advice = None;
            self.set_status("Removed last stint record");
        }
    }

    /// Run the strategy core on the current inputs and log the call.
    pub fn run_advisor(&mut self) {
        let Some(circuit) = self.current_circuit() else {
            self.set_status("Select a circuit first");
            return;
        };

        let advice = self.advisor.advise(
            circuit,
            &self.weather,
            &self.telemetry,
            &self.stint_history,
        );

        self.log.insert(
            0,
            StrategyLogEntry {
                time: Local::now(),
                compound: self.telemetry.compound,
                laps: self.telemetry.tire_age_laps,
                call: advice.call.to_string(),
                severity: advice.severity,
            },
        );
        self.advice = Some(advice);
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn advisor_needs_a_circuit() {
        let mut app = app();
        app.run_advisor();
        assert!(app.advice.is_none());
        assert_eq!(app.status_message.as_deref(), Some("Select a circuit first"));
    }

    #[test]
    fn advisor_run_logs_the_call() {
        let mut app = app();
        app.select_circuit(0);
        app.run_advisor();
        assert!(app.advice.is_some());
        assert_eq!(app.log.len(), 1);
        assert_eq!(app.log[0].call, app.advice.as_ref().unwrap().call);
    }

    #[test]
    fn pit_stop_appends_history_and_resets_age() {
        let mut app = app();
        app.telemetry.tire_age_laps = 22.0;
        app.telemetry.compound = TireCompound::Medium;
        let before = app.stint_history.len();

        app.confirm_pit_stop();

        assert_eq!(app.stint_history.len(), before + 1);
        assert_eq!(
            *app.stint_history.compounds().last().unwrap(),
            TireCompound::Medium
        );
        assert_eq!(app.telemetry.tire_age_laps, 0.0);
    }

    #[test]
    fn undo_removes_the_newest_stint_only() {
        let mut app = app();
        app.telemetry.compound = TireCompound::Hard;
        app.confirm_pit_stop();
        assert_eq!(app.stint_history.len(), 2);

        app.remove_last_stint();
        assert_eq!(app.stint_history.len(), 1);
        assert_eq!(app.stint_history.compounds(), &[TireCompound::Soft]);

        // Emptying the history entirely is allowed; further undos are no-ops.
        app.remove_last_stint();
        app.remove_last_stint();
        assert!(app.stint_history.is_empty());
    }

    #[test]
    fn tire_age_stays_in_bounds() {
        let mut app = app();
        app.telemetry.tire_age_laps = 0.0;
        app.adjust_tire_age(-5.0);
        assert_eq!(app.telemetry.tire_age_laps, 0.0);
        app.adjust_tire_age(100.0);
        assert_eq!(app.telemetry.tire_age_laps, 80.0);
    }

    #[test]
    fn selecting_a_circuit_queues_a_weather_fetch() {
        let mut app = app();
        app.select_circuit(0);
        assert!(app.needs_weather_refresh);
        assert_eq!(app.current_circuit().unwrap().venue, "Melbourne");
    }
}
