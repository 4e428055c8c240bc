use crate::models::{Circuit, PitAdvice, StintHistory, TelemetrySnapshot, TrackWeather};
use crate::ui::components::{caution_gauge, cloud_gauge, urgency_gauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The pit wall: circuit header, telemetry, weather, analysis gauges and
/// the strategy call.
pub struct DashboardScreen<'a> {
    pub circuit: Option<&'a Circuit>,
    pub telemetry: &'a TelemetrySnapshot,
    pub stint_history: &'a StintHistory,
    pub weather: &'a TrackWeather,
    pub advice: Option<&'a PitAdvice>,
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(
        circuit: Option<&'a Circuit>,
        telemetry: &'a TelemetrySnapshot,
        stint_history: &'a StintHistory,
        weather: &'a TrackWeather,
        advice: Option<&'a PitAdvice>,
    ) -> Self {
        Self {
            circuit,
            telemetry,
            stint_history,
            weather,
            advice,
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(6), // Telemetry and weather
                Constraint::Length(5), // Analysis gauges
                Constraint::Min(7),    // Strategy call
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        self.render_telemetry(middle[0], buf);
        self.render_weather(middle[1], buf);

        self.render_gauges(chunks[2], buf);
        self.render_call(chunks[3], buf);
        self.render_status_message(chunks[4], buf);
        self.render_nav(chunks[5], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.circuit {
            Some(c) => format!(
                "Pitwall - {} {} ({}, SC history {})",
                c.country, c.venue, c.category, c.caution_history
            ),
            None => "Pitwall - No Circuit Selected".to_string(),
        };

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let clock = chrono::Local::now().format("%H:%M").to_string();
        let para = Paragraph::new(Span::styled(clock, Theme::dim())).block(block);
        para.render(area, buf);
    }

    fn render_telemetry(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Telemetry", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let compound_style = Style::default().fg(self.telemetry.compound.color());
        let caution = if self.telemetry.caution_active {
            Span::styled("SAFETY CAR DEPLOYED", Theme::warning())
        } else {
            Span::styled("GREEN FLAG", Theme::success())
        };

        let mut history_spans: Vec<Span> = vec![Span::styled("Stints: ", Theme::dim())];
        if self.stint_history.is_empty() {
            history_spans.push(Span::styled("none", Theme::dim()));
        } else {
            for compound in self.stint_history.compounds() {
                history_spans.push(Span::styled(
                    format!("[{}] ", compound.letter()),
                    Style::default().fg(compound.color()),
                ));
            }
        }

        let lines = vec![
            Line::from(vec![
                Span::styled("Tire: ", Theme::dim()),
                Span::styled(self.telemetry.compound.as_str(), compound_style),
                Span::raw("  "),
                Span::styled(
                    format!("{:.0} laps", self.telemetry.tire_age_laps),
                    Theme::normal(),
                ),
            ]),
            Line::from(vec![Span::styled("Track: ", Theme::dim()), caution]),
            Line::from(history_spans),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_weather(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Weather", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.weather.glyph.symbol()),
                    Style::default().fg(self.weather.glyph.color()),
                ),
                Span::styled(&self.weather.status, Theme::header()),
            ]),
            Line::from(Span::styled(&self.weather.detail, Theme::dim())),
            Line::from(vec![
                Span::styled("Rain prob: ", Theme::dim()),
                Span::styled(&self.weather.rain_probability, Theme::normal()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let urgency = self.advice.map(|a| a.urgency);
        urgency_gauge("Pit Urgency", urgency).render(gauge_chunks[0], buf);

        let probability = self.advice.map(|a| a.caution_probability);
        caution_gauge("SC Probability", probability).render(gauge_chunks[1], buf);

        cloud_gauge("Cloud Cover", Some(self.weather.cloud_cover_percent))
            .render(gauge_chunks[2], buf);
    }

    fn render_call(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Strategy Call", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(advice) = self.advice else {
            let lines = vec![
                Line::from(Span::styled("AWAITING INPUT", Theme::header())),
                Line::from(Span::styled(
                    "Select circuit and press Enter to run the advisor.",
                    Theme::dim(),
                )),
            ];
            Paragraph::new(lines).render(inner, buf);
            return;
        };

        let severity_style = Style::default()
            .fg(advice.severity.color())
            .add_modifier(ratatui::style::Modifier::BOLD);
        let compliance = &advice.compliance;
        let compliance_style = Style::default().fg(compliance.tag.color());

        let lines = vec![
            Line::from(Span::styled(advice.call, severity_style)),
            Line::from(Span::styled(advice.reason, Theme::dim())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Regulations: ", Theme::dim()),
                Span::styled(
                    format!("{} {}", compliance.tag.symbol(), compliance.message),
                    compliance_style,
                ),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("ERROR") || msg.contains("failed") {
                Theme::warning()
            } else {
                Theme::success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Pit Wall ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Circuits ", Theme::nav_label()),
            Span::styled("[3]", Theme::nav_key()),
            Span::styled("Log ", Theme::nav_label()),
            Span::styled("[+/-]", Theme::nav_key()),
            Span::styled("Tire age ", Theme::nav_label()),
            Span::styled("[c]", Theme::nav_key()),
            Span::styled("Compound ", Theme::nav_label()),
            Span::styled("[s]", Theme::nav_key()),
            Span::styled("SC ", Theme::nav_label()),
            Span::styled("[p]", Theme::nav_key()),
            Span::styled("Pit ", Theme::nav_label()),
            Span::styled("[x]", Theme::nav_key()),
            Span::styled("Undo ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Advise ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Weather ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);

        Paragraph::new(nav).render(area, buf);
    }
}
