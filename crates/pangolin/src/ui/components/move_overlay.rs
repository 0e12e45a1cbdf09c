use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::path_editor::{EditorFocus, PathEditor};
use crate::ui::Component;
use crate::ui::layout::{centered_rect, percent_clamped};
use crate::ui::text_util::truncate_with_ellipsis;

const MIN_OVERLAY_HEIGHT: u16 = 10;
const MIN_OVERLAY_WIDTH: u16 = 40;
const OVERLAY_HEIGHT_PERCENT: u16 = 60;
const OVERLAY_WIDTH_PERCENT: u16 = 70;
const CANDIDATE_CHROME_HEIGHT: u16 = 5;

/// Centered popup hosting the breadcrumb path editor for a move.
///
/// Shows the composed target path, one segment control per breadcrumb node
/// (the focused control is highlighted), and the candidate list of the
/// focused node.
pub struct MoveOverlay<'a> {
    source_name: &'a str,
    editor: &'a PathEditor,
}

impl<'a> MoveOverlay<'a> {
    pub fn new(source_name: &'a str, editor: &'a PathEditor) -> Self {
        Self {
            source_name,
            editor,
        }
    }

    fn breadcrumb_line(&self) -> Line<'_> {
        let focused_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let node_style = Style::default().fg(Color::Cyan);

        let mut spans = vec![Span::raw(" ")];
        for (index, node) in self.editor.nodes().iter().enumerate() {
            let style = if self.editor.focus() == EditorFocus::Node(index) {
                focused_style
            } else {
                node_style
            };
            spans.push(Span::styled(format!(" {} ", node.selected()), style));
            spans.push(Span::styled("/", Style::default().fg(Color::DarkGray)));
        }

        let trailing_style = if self.editor.focus() == EditorFocus::Trailing {
            focused_style
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!(" {} ", self.editor.trailing_name()),
            trailing_style,
        ));
        if self.editor.is_trailing_editable() && self.editor.focus() == EditorFocus::Trailing {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }

        Line::from(spans)
    }

    fn candidate_lines(&self, visible: usize) -> Vec<Line<'_>> {
        let Some(node) = self.editor.focused_node() else {
            return vec![Line::from(Span::styled(
                " (editing name)",
                Style::default().fg(Color::DarkGray),
            ))];
        };
        if node.is_loading() {
            return vec![Line::from(Span::styled(
                " loading...",
                Style::default().fg(Color::DarkGray),
            ))];
        }
        if node.candidates().is_empty() {
            return vec![Line::from(Span::styled(
                " (no subdirectories)",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        // Keep the highlighted candidate in view when the list is long.
        let highlight = node.highlight();
        let first = highlight
            .unwrap_or(0)
            .saturating_sub(visible.saturating_sub(1));

        node.candidates()
            .iter()
            .enumerate()
            .skip(first)
            .take(visible.max(1))
            .map(|(index, candidate)| {
                let style = if highlight == Some(index) {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::White)
                };

                Line::from(Span::styled(format!(" {candidate}"), style))
            })
            .collect()
    }
}

impl Component for MoveOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let width = percent_clamped(area.width, OVERLAY_WIDTH_PERCENT, MIN_OVERLAY_WIDTH);
        let height = percent_clamped(area.height, OVERLAY_HEIGHT_PERCENT, MIN_OVERLAY_HEIGHT);
        let popup_area = centered_rect(area, width, height);

        let title_width = usize::from(popup_area.width.saturating_sub(10));
        let title = format!(
            " Move {} ",
            truncate_with_ellipsis(self.source_name, title_width)
        );

        let target_width = usize::from(popup_area.width.saturating_sub(6));
        let target = truncate_with_ellipsis(self.editor.get_path().as_str(), target_width);
        let visible_candidates =
            usize::from(popup_area.height.saturating_sub(CANDIDATE_CHROME_HEIGHT));

        let mut lines = vec![
            Line::from(vec![
                Span::styled(" To: ", Style::default().fg(Color::Gray)),
                Span::styled(target, Style::default().fg(Color::White)),
            ]),
            self.breadcrumb_line(),
            Line::from(""),
        ];
        lines.extend(self.candidate_lines(visible_candidates));

        let paragraph = Paragraph::new(lines).block(
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
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use super::*;
    use crate::domain::path::JailPath;
    use crate::infra::service::MockServiceClient;

    fn test_editor() -> PathEditor {
        let mut service = MockServiceClient::new();
        service
            .expect_list()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let path = JailPath::parse("/movies/tv/show.mkv").expect("path must parse");

        PathEditor::new(Arc::new(service), event_tx, &path, true)
    }

    #[tokio::test]
    async fn test_move_overlay_shows_breadcrumb_and_target() {
        // Arrange
        let backend = ratatui::backend::TestBackend::new(90, 24);
        let mut terminal = ratatui::Terminal::new(backend).expect("failed to create terminal");
        let editor = test_editor();
        let overlay = MoveOverlay::new("show.mkv", &editor);

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                Component::render(&overlay, f, area);
            })
            .expect("failed to draw");

        // Assert
        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Move show.mkv"));
        assert!(text.contains("/movies/tv/show.mkv"));
        assert!(text.contains("movies"));
        assert!(text.contains("loading..."));
    }
}
