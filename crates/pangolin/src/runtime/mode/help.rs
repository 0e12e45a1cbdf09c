use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::model::AppMode;
use crate::runtime::EventResult;

/// Handles key input while the help overlay is visible.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::Enter => {
            app.mode = AppMode::Browse;
        }
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::domain::path::JailPath;
    use crate::infra::service::MockServiceClient;

    #[tokio::test]
    async fn test_any_close_key_returns_to_browse() {
        // Arrange
        let mut service = MockServiceClient::new();
        service
            .expect_list()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        let mut app = App::new(Arc::new(service), JailPath::root());
        app.mode = AppMode::Help;

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        // Assert
        assert!(!app.is_modal());
    }
}
