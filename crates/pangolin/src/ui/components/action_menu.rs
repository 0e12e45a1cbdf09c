use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::ActionKind;
use crate::ui::Component;
use crate::ui::layout::{centered_rect, percent_clamped};
use crate::ui::text_util::truncate_with_ellipsis;

const MIN_OVERLAY_WIDTH: u16 = 28;
const OVERLAY_WIDTH_PERCENT: u16 = 35;
const VERTICAL_CHROME: u16 = 2;

/// Centered popup listing the actions available for one entry.
pub struct ActionMenuOverlay<'a> {
    entry_name: &'a str,
    actions: &'a [ActionKind],
    selected: usize,
}

impl<'a> ActionMenuOverlay<'a> {
    pub fn new(entry_name: &'a str, actions: &'a [ActionKind], selected: usize) -> Self {
        Self {
            entry_name,
            actions,
            selected,
        }
    }
}

impl Component for ActionMenuOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let width = percent_clamped(area.width, OVERLAY_WIDTH_PERCENT, MIN_OVERLAY_WIDTH);
        let height = u16::try_from(self.actions.len()).unwrap_or(u16::MAX) + VERTICAL_CHROME;
        let popup_area = centered_rect(area, width, height);

        let title_width = usize::from(popup_area.width.saturating_sub(4));
        let title = format!(" {} ", truncate_with_ellipsis(self.entry_name, title_width));

        let selected_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line<'_>> = self
            .actions
            .iter()
            .enumerate()
            .map(|(index, action)| {
                let style = if index == self.selected {
                    selected_style
                } else {
                    Style::default().fg(Color::White)
                };

                Line::from(Span::styled(format!(" {} ", action.label()), style))
            })
            .collect();

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
