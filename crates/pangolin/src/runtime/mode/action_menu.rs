use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::model::AppMode;
use crate::runtime::EventResult;

/// Handles key input while the action menu is visible.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::ActionMenu {
        entry,
        actions,
        selected,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            *selected = (*selected + 1).min(actions.len().saturating_sub(1));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *selected = selected.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(action) = actions.get(*selected).copied() {
                let entry = entry.clone();
                app.run_action(action, entry);
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.mode = AppMode::Browse;
        }
        _ => {}
    }

    EventResult::Continue
}
