pub mod components;
pub mod layout;
pub mod pages;
pub mod text_util;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::TableState;

use crate::domain::entry::Entry;
use crate::domain::path::JailPath;
use crate::model::AppMode;
use crate::ui::components::action_menu::ActionMenuOverlay;
use crate::ui::components::confirmation_overlay::ConfirmationOverlay;
use crate::ui::components::footer_bar::FooterBar;
use crate::ui::components::help_overlay::HelpOverlay;
use crate::ui::components::input_overlay::InputOverlay;
use crate::ui::components::move_overlay::MoveOverlay;
use crate::ui::components::status_bar::StatusBar;
use crate::ui::pages::listing::ListingPage;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

pub struct RenderContext<'a> {
    pub current_path: &'a JailPath,
    pub entries: &'a [Entry],
    pub error: Option<&'a str>,
    pub notice: Option<&'a str>,
    pub loading: bool,
    pub mode: &'a AppMode,
    pub table_state: &'a mut TableState,
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        current_path,
        entries,
        error,
        notice,
        loading,
        mode,
        table_state,
    } = context;

    let area = f.area();

    // Three-section layout: top status bar, content area, footer bar
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Top status bar
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    StatusBar::new(current_path, loading).render(f, status_bar_area);
    FooterBar::new(mode, error, notice).render(f, footer_bar_area);

    // The listing always renders; dialogs are overlays on top of it.
    ListingPage::new(entries, table_state).render(f, content_area);

    match mode {
        AppMode::Browse => {}
        AppMode::ActionMenu {
            entry,
            actions,
            selected,
        } => {
            ActionMenuOverlay::new(&entry.name, actions, *selected).render(f, content_area);
        }
        AppMode::Move { source, editor } => {
            MoveOverlay::new(&source.name, editor).render(f, content_area);
        }
        AppMode::ConfirmDelete {
            entry,
            selected_yes,
        } => {
            let message = format!("Delete \"{}\"?", entry.name);
            ConfirmationOverlay::new("Confirm Delete", &message, *selected_yes)
                .render(f, content_area);
        }
        AppMode::ConfirmEpisodeRename {
            entry,
            episode,
            selected_yes,
        } => {
            let message = format!("Rename \"{}\" as {}?", entry.name, episode);
            ConfirmationOverlay::new("Rename TV Episode", &message, *selected_yes)
                .render(f, content_area);
        }
        AppMode::Mkdir { input } => {
            InputOverlay::new("New Directory", input).render(f, content_area);
        }
        AppMode::Help => {
            HelpOverlay.render(f, content_area);
        }
    }
}
