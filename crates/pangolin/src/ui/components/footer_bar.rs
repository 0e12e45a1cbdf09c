use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::AppMode;
use crate::ui::Component;

/// Bottom bar showing either the error channel, a success notice, or the key
/// hints for the current mode.
pub struct FooterBar<'a> {
    mode: &'a AppMode,
    error: Option<&'a str>,
    notice: Option<&'a str>,
}

impl<'a> FooterBar<'a> {
    pub fn new(mode: &'a AppMode, error: Option<&'a str>, notice: Option<&'a str>) -> Self {
        Self {
            mode,
            error,
            notice,
        }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            AppMode::Browse => {
                " ↑/↓ select   Enter open   Space actions   n mkdir   r refresh   ? help   q quit"
            }
            AppMode::ActionMenu { .. } => " ↑/↓ select   Enter run   Esc close",
            AppMode::Move { .. } => {
                " ←/→ field   ↑/↓ choose   Enter apply/submit   Esc cancel"
            }
            AppMode::ConfirmDelete { .. } | AppMode::ConfirmEpisodeRename { .. } => {
                " ←/→ choose   Enter confirm   Esc cancel"
            }
            AppMode::Mkdir { .. } => " type a name   Enter create   Esc cancel",
            AppMode::Help => " Esc close",
        }
    }
}

impl Component for FooterBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let line = if let Some(error) = self.error {
            Line::from(Span::styled(
                format!(" {error}"),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ))
        } else if let Some(notice) = self.notice {
            Line::from(Span::styled(
                format!(" {notice}"),
                Style::default().fg(Color::Black).bg(Color::Green),
            ))
        } else {
            Line::from(Span::styled(
                self.hints(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::DIM),
            ))
        };

        let footer = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        f.render_widget(footer, area);
    }
}
