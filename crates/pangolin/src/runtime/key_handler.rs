use crossterm::event::{KeyEvent, KeyEventKind};

use crate::app::App;
use crate::model::AppMode;
use crate::runtime::{EventResult, mode};

/// Routes a key event to the handler for the mode that owns the keyboard.
///
/// Exactly one handler sees each key: the browse bindings are inert while a
/// dialog is open.
pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Continue;
    }

    match &app.mode {
        AppMode::Browse => mode::browse::handle(app, key),
        AppMode::ActionMenu { .. } => mode::action_menu::handle(app, key),
        AppMode::Move { .. } => mode::move_dialog::handle(app, key),
        AppMode::ConfirmDelete { .. } => mode::confirm_delete::handle(app, key),
        AppMode::ConfirmEpisodeRename { .. } => mode::confirm_rename::handle(app, key),
        AppMode::Mkdir { .. } => mode::mkdir::handle(app, key),
        AppMode::Help => mode::help::handle(app, key),
    }
}
