use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::model::AppMode;
use crate::runtime::EventResult;

/// Handles key input while browsing the listing.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            if let Some(entry) = app.selected_entry() {
                if entry.is_directory() {
                    app.open_entry(&entry);
                } else {
                    app.open_action_menu(entry);
                }
            }
        }
        KeyCode::Char(' ' | 'a') => {
            if let Some(entry) = app.selected_entry() {
                app.open_action_menu(entry);
            }
        }
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => app.open_parent(),
        KeyCode::Char('n') => app.begin_mkdir(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('?') => app.mode = AppMode::Help,
        KeyCode::Esc => app.clear_error(),
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::domain::entry::Entry;
    use crate::domain::path::JailPath;
    use crate::infra::service::MockServiceClient;

    async fn browsing_app(entries: Vec<&'static str>) -> App {
        let mut service = MockServiceClient::new();
        service.expect_list().returning(move |_| {
            let entries = entries.clone();
            Box::pin(async move { Ok(entries.into_iter().map(Entry::new).collect()) })
        });
        let mut app = App::new(
            Arc::new(service),
            JailPath::parse("/tv/").expect("path must parse"),
        );
        let event = app.next_app_event().await.expect("listing expected");
        app.apply_app_event(event);

        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_q_quits() {
        // Arrange
        let mut app = browsing_app(vec![]).await;

        // Act & Assert
        assert!(matches!(
            handle(&mut app, press(KeyCode::Char('q'))),
            EventResult::Quit
        ));
    }

    #[tokio::test]
    async fn test_enter_on_directory_descends() {
        // Arrange — rows: "../", "specials/"
        let mut app = browsing_app(vec!["specials/"]).await;
        app.next();

        // Act
        handle(&mut app, press(KeyCode::Enter));
        let event = app.next_app_event().await.expect("listing expected");
        app.apply_app_event(event);

        // Assert
        assert_eq!(app.current_path().as_str(), "/tv/specials/");
    }

    #[tokio::test]
    async fn test_enter_on_file_opens_action_menu() {
        // Arrange
        let mut app = browsing_app(vec!["show.mkv"]).await;
        app.next();

        // Act
        handle(&mut app, press(KeyCode::Enter));

        // Assert
        assert!(matches!(app.mode, AppMode::ActionMenu { .. }));
    }

    #[tokio::test]
    async fn test_space_on_parent_entry_does_nothing() {
        // Arrange — selection starts on "../"
        let mut app = browsing_app(vec!["show.mkv"]).await;

        // Act
        handle(&mut app, press(KeyCode::Char(' ')));

        // Assert
        assert!(!app.is_modal());
    }

    #[tokio::test]
    async fn test_question_mark_opens_help() {
        // Arrange
        let mut app = browsing_app(vec![]).await;

        // Act
        handle(&mut app, press(KeyCode::Char('?')));

        // Assert
        assert!(matches!(app.mode, AppMode::Help));
    }

    #[tokio::test]
    async fn test_esc_clears_error() {
        // Arrange
        let mut app = browsing_app(vec![]).await;
        app.show_error("boom");

        // Act
        handle(&mut app, press(KeyCode::Esc));

        // Assert
        assert_eq!(app.error(), None);
    }
}
