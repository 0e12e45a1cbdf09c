use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::app::path_editor::EditorFocus;
use crate::model::AppMode;
use crate::runtime::EventResult;

/// Handles key input while the move dialog is visible.
///
/// Enter is contextual: on a breadcrumb node it commits the highlighted
/// candidate and rebuilds the editor, on the trailing name it submits the
/// move.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::Move { editor, .. } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Esc => {
            app.mode = AppMode::Browse;
        }
        KeyCode::Tab | KeyCode::Right => editor.focus_next(),
        KeyCode::BackTab | KeyCode::Left => editor.focus_previous(),
        KeyCode::Down => editor.highlight_next(),
        KeyCode::Up => editor.highlight_previous(),
        KeyCode::Enter => match editor.focus() {
            EditorFocus::Node(_) => {
                editor.commit_highlighted();
            }
            EditorFocus::Trailing => app.submit_move(),
        },
        KeyCode::Backspace => {
            if editor.focus() == EditorFocus::Trailing {
                editor.pop_trailing();
            }
        }
        KeyCode::Char(character) => {
            if editor.focus() == EditorFocus::Trailing {
                editor.push_trailing(character);
            }
        }
        _ => {}
    }

    EventResult::Continue
}
