use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::layout::{centered_rect, percent_clamped};
use crate::ui::text_util::truncate_with_ellipsis;

const MIN_OVERLAY_WIDTH: u16 = 32;
const OVERLAY_WIDTH_PERCENT: u16 = 40;
// Message line, spacer, option row, plus the border.
const OVERLAY_HEIGHT: u16 = 5;

/// Yes/No popup for the delete and episode-rename dialogs.
///
/// Which option starts selected is the caller's choice: deleting defaults to
/// `No`, the non-destructive rename defaults to `Yes`. The message is cut to
/// one line so the options never scroll out of the popup.
pub struct ConfirmationOverlay<'a> {
    title: &'a str,
    message: &'a str,
    selected_yes: bool,
}

impl<'a> ConfirmationOverlay<'a> {
    pub fn new(title: &'a str, message: &'a str, selected_yes: bool) -> Self {
        Self {
            title,
            message,
            selected_yes,
        }
    }

    fn option(label: &str, selected: bool) -> Span<'_> {
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Span::styled(format!("[ {label} ]"), style)
    }
}

impl Component for ConfirmationOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let width = percent_clamped(area.width, OVERLAY_WIDTH_PERCENT, MIN_OVERLAY_WIDTH);
        let popup_area = centered_rect(area, width, OVERLAY_HEIGHT);

        let message_width = usize::from(popup_area.width.saturating_sub(4));
        let message = truncate_with_ellipsis(self.message, message_width);
        let title = format!(" {} ", self.title);

        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(message, Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(vec![
                Self::option("Yes", self.selected_yes),
                Span::raw("   "),
                Self::option("No", !self.selected_yes),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(title, Style::default().fg(Color::Cyan))),
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(overlay: &ConfirmationOverlay<'_>) -> String {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                Component::render(overlay, f, area);
            })
            .expect("failed to draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_confirmation_overlay_stores_default_selection() {
        // Arrange & Act
        let deleting = ConfirmationOverlay::new("Confirm Delete", "Delete \"old/\"?", false);
        let renaming = ConfirmationOverlay::new("Rename TV Episode", "Rename?", true);

        // Assert
        assert!(!deleting.selected_yes);
        assert!(renaming.selected_yes);
    }

    #[test]
    fn test_confirmation_overlay_shows_both_options() {
        // Arrange
        let overlay = ConfirmationOverlay::new("Confirm Delete", "Delete \"old/\"?", false);

        // Act
        let text = rendered_text(&overlay);

        // Assert
        assert!(text.contains("[ Yes ]"));
        assert!(text.contains("[ No ]"));
        assert!(text.contains("Delete \"old/\"?"));
    }

    #[test]
    fn test_confirmation_overlay_preserves_choices_for_long_message() {
        // Arrange
        let message = "Delete \"a directory with a very long name that keeps going and would \
                       otherwise hide the choices in the confirmation popup\"?";
        let overlay = ConfirmationOverlay::new("Confirm Delete", message, false);

        // Act
        let text = rendered_text(&overlay);

        // Assert
        assert!(text.contains("[ Yes ]"));
        assert!(text.contains("[ No ]"));
        assert!(text.contains("..."));
    }
}
