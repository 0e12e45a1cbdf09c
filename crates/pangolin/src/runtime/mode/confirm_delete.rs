use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::model::AppMode;
use crate::runtime::EventResult;

/// Handles key input while delete confirmation is visible.
///
/// `No` is selected by default; a plain Enter then only closes the dialog.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::ConfirmDelete { selected_yes, .. } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            *selected_yes = !*selected_yes;
        }
        KeyCode::Char('y') => app.confirm_delete(),
        KeyCode::Enter => {
            if *selected_yes {
                app.confirm_delete();
            } else {
                app.mode = AppMode::Browse;
            }
        }
        KeyCode::Esc | KeyCode::Char('n' | 'q') => {
            app.mode = AppMode::Browse;
        }
        _ => {}
    }

    EventResult::Continue
}
