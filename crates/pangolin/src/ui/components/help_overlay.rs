use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::layout::{centered_rect, percent_clamped};

const OVERLAY_WIDTH_PERCENT: u16 = 60;
const OVERLAY_HEIGHT_PERCENT: u16 = 60;
const MIN_OVERLAY_WIDTH: u16 = 40;
const MIN_OVERLAY_HEIGHT: u16 = 14;

const KEYBINDINGS: &[(&str, &str)] = &[
    ("↑/↓, k/j", "move selection"),
    ("Enter", "open directory / actions for a file"),
    ("Space, a", "action menu for the selected entry"),
    ("Backspace, h", "parent directory"),
    ("n", "new directory"),
    ("r", "refresh listing"),
    ("Esc", "dismiss error"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Centered popup overlay showing the browse keybindings.
pub struct HelpOverlay;

impl Component for HelpOverlay {
    fn render(&self, f: &mut Frame, area: Rect) {
        let width = percent_clamped(area.width, OVERLAY_WIDTH_PERCENT, MIN_OVERLAY_WIDTH);
        let height = percent_clamped(area.height, OVERLAY_HEIGHT_PERCENT, MIN_OVERLAY_HEIGHT);
        let popup_area = centered_rect(area, width, height);

        f.render_widget(Clear, popup_area);

        let key_width = KEYBINDINGS
            .iter()
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line<'_>> = Vec::with_capacity(KEYBINDINGS.len() + 1);
        lines.push(Line::from(""));
        for (key, description) in KEYBINDINGS {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{key:>key_width$}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(": ", Style::default().fg(Color::White)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(" Help ", Style::default().fg(Color::Cyan))),
        );

        f.render_widget(paragraph, popup_area);
    }
}
