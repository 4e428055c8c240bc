use crate::app::LogState;
use crate::models::StrategyLogEntry;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Chronological record of advisor calls, newest first.
pub struct LogScreen<'a> {
    pub entries: &'a [StrategyLogEntry],
    pub state: &'a LogState,
}

impl<'a> LogScreen<'a> {
    pub fn new(entries: &'a [StrategyLogEntry], state: &'a LogState) -> Self {
        Self { entries, state }
    }
}

impl Widget for LogScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_entries(chunks[1], buf);
        self.render_nav(chunks[2], buf);
    }
}

impl LogScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Strategy Log", Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());
        let count = format!("{} calls this session", self.entries.len());
        Paragraph::new(Span::styled(count, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_entries(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Paragraph::new(Span::styled(
                "No advisor calls yet. Run the advisor from the pit wall.",
                Theme::dim(),
            ))
            .render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let offset = self
            .state
            .selected_index
            .saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, entry)| self.entry_line(idx, entry))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn entry_line(&self, idx: usize, entry: &StrategyLogEntry) -> Line<'static> {
        let selected = idx == self.state.selected_index;
        let marker = if selected { "> " } else { "  " };
        let call_style = Style::default().fg(entry.severity.color());

        Line::from(vec![
            Span::styled(marker.to_string(), Theme::highlight()),
            Span::styled(entry.time.format("%H:%M:%S ").to_string(), Theme::dim()),
            Span::styled(
                format!("[{}] ", entry.compound.letter()),
                Style::default().fg(entry.compound.color()),
            ),
            Span::styled(format!("{:>2.0} laps  ", entry.laps), Theme::normal()),
            Span::styled(entry.call.clone(), call_style),
        ])
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[Up/Down]", Theme::nav_key()),
            Span::styled("Move ", Theme::nav_label()),
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Pit Wall ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Circuits ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(area, buf);
    }
}
