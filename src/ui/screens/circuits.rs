use crate::app::CircuitsState;
use crate::models::{Circuit, CIRCUITS};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Circuit directory with cursor selection.
pub struct CircuitsScreen<'a> {
    pub state: &'a CircuitsState,
    pub active_circuit: Option<&'a Circuit>,
}

impl<'a> CircuitsScreen<'a> {
    pub fn new(state: &'a CircuitsState, active_circuit: Option<&'a Circuit>) -> Self {
        Self {
            state,
            active_circuit,
        }
    }
}

impl Widget for CircuitsScreen<'_> {
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
        self.render_list(chunks[1], buf);
        self.render_nav(chunks[2], buf);
    }
}

impl CircuitsScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Circuit Directory", Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());
        let active = match self.active_circuit {
            Some(c) => format!("Active: {} {}", c.country, c.venue),
            None => "Active: none".to_string(),
        };
        Paragraph::new(Span::styled(active, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = inner.height as usize;
        // Keep the cursor in view when the list is taller than the pane.
        let offset = self
            .state
            .selected_index
            .saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = CIRCUITS
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, circuit)| self.circuit_line(idx, circuit))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn circuit_line(&self, idx: usize, circuit: &Circuit) -> Line<'static> {
        let selected = idx == self.state.selected_index;
        let marker = if selected { "> " } else { "  " };
        let name_style = if selected {
            Theme::selected()
        } else {
            Theme::normal()
        };

        Line::from(vec![
            Span::styled(marker.to_string(), Theme::highlight()),
            Span::styled(
                format!("{:<14} {:<18}", circuit.country, circuit.venue),
                name_style,
            ),
            Span::styled(format!("{:<10}", circuit.category.as_str()), Theme::dim()),
            Span::styled(
                format!("SC {}", circuit.caution_history.as_str()),
                Style::default().fg(circuit.caution_history.color()),
            ),
        ])
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[Up/Down]", Theme::nav_key()),
            Span::styled("Move ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Select ", Theme::nav_label()),
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Pit Wall ", Theme::nav_label()),
            Span::styled("[3]", Theme::nav_key()),
            Span::styled("Log ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(area, buf);
    }
}
