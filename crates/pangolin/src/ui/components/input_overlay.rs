use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::layout::{centered_rect, percent_clamped};

const MIN_OVERLAY_WIDTH: u16 = 30;
const OVERLAY_HEIGHT: u16 = 3;
const OVERLAY_WIDTH_PERCENT: u16 = 40;

/// Centered single-line text input popup.
pub struct InputOverlay<'a> {
    title: &'a str,
    input: &'a str,
}

impl<'a> InputOverlay<'a> {
    pub fn new(title: &'a str, input: &'a str) -> Self {
        Self { title, input }
    }
}

impl Component for InputOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let width = percent_clamped(area.width, OVERLAY_WIDTH_PERCENT, MIN_OVERLAY_WIDTH);
        let popup_area = centered_rect(area, width, OVERLAY_HEIGHT);

        let title = format!(" {} ", self.title);
        let line = Line::from(vec![
            Span::styled(
                " › ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.input, Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(title, Style::default().fg(Color::Cyan))),
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}
