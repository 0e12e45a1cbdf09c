use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::model::AppMode;
use crate::runtime::EventResult;

/// Handles key input while the TV-rename confirmation is visible.
///
/// The rename is non-destructive, so `Yes` is selected by default.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::ConfirmEpisodeRename { selected_yes, .. } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            *selected_yes = !*selected_yes;
        }
        KeyCode::Char('y') => app.confirm_episode_rename(),
        KeyCode::Enter => {
            if *selected_yes {
                app.confirm_episode_rename();
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
