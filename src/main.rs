mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasources::OpenMeteoClient;
use error::Result;
use models::CIRCUITS;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{CircuitsScreen, DashboardScreen, LogScreen};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load configuration
    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Circuits) => {
            print_circuits();
            return Ok(());
        }
        Some(Commands::Check) => {
            run_check(&config).await;
            return Ok(());
        }
        None => {}
    }

    let mut app = App::new(config);
    if let Some(name) = cli.compound.as_deref() {
        match models::TireCompound::from_str(name) {
            Some(compound) => app.telemetry.compound = compound,
            None => {
                eprintln!("Unknown compound {:?}", name);
                std::process::exit(1);
            }
        }
    }
    let weather_client = OpenMeteoClient::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, &weather_client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_circuits() {
    println!(
        "{:<16} {:<20} {:<10} {:<8} {:>9} {:>10}",
        "COUNTRY", "VENUE", "TYPE", "SC RISK", "LAT", "LON"
    );
    for circuit in CIRCUITS {
        println!(
            "{:<16} {:<20} {:<10} {:<8} {:>9.4} {:>10.4}",
            circuit.country,
            circuit.venue,
            circuit.category.as_str(),
            circuit.caution_history.as_str(),
            circuit.lat,
            circuit.lon,
        );
    }
}

async fn run_check(config: &Config) {
    println!("Config: OK");
    println!(
        "  critical threshold: {:.1}, strategic threshold: {:.1}",
        config.calibration.thresholds.critical, config.calibration.thresholds.strategic
    );
    print!("  compound ranks:");
    for compound in models::TireCompound::ALL {
        print!(
            " {}={:.0}",
            compound.letter(),
            config.calibration.compound_ranks.rank(compound)
        );
    }
    println!();
    println!(
        "  weather fetch: {}",
        if config.weather.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    if !config.weather.enabled {
        return;
    }

    let client = OpenMeteoClient::new();
    match client.test_connection().await {
        Ok(true) => println!("Open-Meteo: OK"),
        Ok(false) => println!("Open-Meteo: unexpected response"),
        Err(e) => println!("Open-Meteo: FAILED ({})", e),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    weather_client: &OpenMeteoClient,
) -> Result<()>
where
    error::PitwallError: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        // Draw UI
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Dashboard => {
                    let screen = DashboardScreen::new(
                        app.current_circuit(),
                        &app.telemetry,
                        &app.stint_history,
                        &app.weather,
                        app.advice.as_ref(),
                    )
                    .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Circuits => {
                    let screen = CircuitsScreen::new(&app.circuits_state, app.current_circuit());
                    f.render_widget(screen, area);
                }
                Screen::Log => {
                    let screen = LogScreen::new(&app.log, &app.log_state);
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Handle input with timeout so queued weather fetches still run
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        app.quit();
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => {
                        app.switch_screen(Screen::Dashboard);
                    }
                    KeyCode::Char(c) => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code);
                    }
                }
            }
        }

        // Handle queued weather fetch
        if app.needs_weather_refresh {
            app.needs_weather_refresh = false;
            if let Some(circuit) = app.current_circuit() {
                match weather_client.fetch_weather(circuit).await {
                    Ok(weather) => {
                        app.update_weather(weather);
                        app.set_status("Weather updated");
                    }
                    Err(e) => {
                        tracing::warn!("weather fetch failed: {}", e);
                        app.update_weather(models::TrackWeather::unavailable());
                        app.set_status("Weather fetch failed, using defaults");
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Dashboard => handle_dashboard_input(app, code),
        Screen::Circuits => handle_circuits_input(app, code),
        Screen::Log => handle_log_input(app, code),
    }
}

fn handle_dashboard_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_tire_age(1.0),
        KeyCode::Char('-') => app.adjust_tire_age(-1.0),
        KeyCode::Char('c') => app.cycle_compound(),
        KeyCode::Char('s') => app.toggle_caution(),
        KeyCode::Char('p') => app.confirm_pit_stop(),
        KeyCode::Char('x') => app.remove_last_stint(),
        KeyCode::Char('r') => app.request_weather_refresh(),
        KeyCode::Enter | KeyCode::Char(' ') => app.run_advisor(),
        _ => {}
    }
}

fn handle_circuits_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.circuits_state.prev(),
        KeyCode::Down => app.circuits_state.next(CIRCUITS.len()),
        KeyCode::Enter => {
            app.select_circuit(app.circuits_state.selected_index);
            app.switch_screen(Screen::Dashboard);
        }
        _ => {}
    }
}

fn handle_log_input(app: &mut App, code: KeyCode) {
    let count = app.log.len();
    match code {
        KeyCode::Up => app.log_state.prev(),
        KeyCode::Down => app.log_state.next(count),
        _ => {}
    }
}
