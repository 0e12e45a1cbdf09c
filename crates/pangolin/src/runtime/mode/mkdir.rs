use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::model::AppMode;
use crate::runtime::EventResult;

/// Handles key input while the new-directory dialog is visible.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::Mkdir { input } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Char(character) if character != '/' => input.push(character),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Enter => app.submit_mkdir(),
        KeyCode::Esc => {
            app.mode = AppMode::Browse;
        }
        _ => {}
    }

    EventResult::Continue
}
