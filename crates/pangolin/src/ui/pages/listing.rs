use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use crate::domain::entry::Entry;
use crate::ui::Page;
use crate::ui::text_util::truncate_with_ellipsis;

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";
const KIND_COLUMN_WIDTH: u16 = 5;

/// Directory listing page renderer.
pub struct ListingPage<'a> {
    pub entries: &'a [Entry],
    pub table_state: &'a mut TableState,
}

impl<'a> ListingPage<'a> {
    /// Creates a directory listing page renderer.
    pub fn new(entries: &'a [Entry], table_state: &'a mut TableState) -> Self {
        Self {
            entries,
            table_state,
        }
    }

    fn entry_style(entry: &Entry) -> Style {
        if entry.is_parent() {
            Style::default().fg(Color::DarkGray)
        } else if entry.is_directory() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

impl Page for ListingPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Files");
        let name_column_width = usize::from(
            block
                .inner(area)
                .width
                .saturating_sub(KIND_COLUMN_WIDTH + 1)
                .saturating_sub(u16::try_from(ROW_HIGHLIGHT_SYMBOL.len()).unwrap_or(u16::MAX)),
        );

        let rows = self.entries.iter().map(|entry| {
            let kind = if entry.is_directory() { "dir" } else { "file" };
            Row::new(vec![
                Cell::from(truncate_with_ellipsis(&entry.name, name_column_width))
                    .style(Self::entry_style(entry)),
                Cell::from(kind).style(Style::default().fg(Color::Gray)),
            ])
        });

        let table = Table::new(
            rows,
            [Constraint::Min(0), Constraint::Length(KIND_COLUMN_WIDTH)],
        )
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(table, area, self.table_state);
    }
}
