//! Dialog workflows for the entry actions: move, delete, mkdir, TV rename,
//! and download.
//!
//! Each workflow opens its dialog mode, then on confirmation spawns the
//! service call and returns to browsing; the outcome arrives later as an
//! [`AppEvent`] and is applied by the reducer.

use std::sync::Arc;

use crate::app::path_editor::PathEditor;
use crate::app::{App, AppEvent};
use crate::domain::entry::Entry;
use crate::domain::episode::EpisodeInfo;
use crate::infra::service;
use crate::model::{ActionKind, AppMode};

impl App {
    /// Opens the action menu for `entry`; the parent entry gets no menu.
    pub fn open_action_menu(&mut self, entry: Entry) {
        if entry.is_parent() {
            return;
        }
        let actions = ActionKind::available_for(&entry);
        self.mode = AppMode::ActionMenu {
            entry,
            actions,
            selected: 0,
        };
    }

    /// Dispatches the chosen menu action.
    pub fn run_action(&mut self, action: ActionKind, entry: Entry) {
        match action {
            ActionKind::Open => {
                self.mode = AppMode::Browse;
                self.open_entry(&entry);
            }
            ActionKind::Move => self.begin_move(entry),
            ActionKind::Delete => {
                self.mode = AppMode::ConfirmDelete {
                    entry,
                    selected_yes: false,
                };
            }
            ActionKind::RenameEpisode => self.begin_episode_rename(entry),
            ActionKind::Download => {
                self.mode = AppMode::Browse;
                self.download(&entry);
            }
        }
    }

    /// Opens the move dialog with a path editor seeded from `entry`'s
    /// current location.
    fn begin_move(&mut self, entry: Entry) {
        let editor = PathEditor::new(
            Arc::clone(&self.service),
            self.event_tx.clone(),
            &self.full_path_of(&entry),
            true,
        );
        self.mode = AppMode::Move {
            source: entry,
            editor,
        };
    }

    /// Submits the move dialog's composed target path.
    pub fn submit_move(&mut self) {
        let AppMode::Move { source, editor } = &self.mode else {
            return;
        };
        let source_path = self.full_path_of(source);
        let target = editor.get_path();
        // After the move, show the directory the entry landed in.
        let refresh = target.parent();

        let service = Arc::clone(&self.service);
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let result = service.move_entry(source_path, target).await;
            let _ = events.send(AppEvent::ActionFinished { refresh, result });
        });

        self.mode = AppMode::Browse;
    }

    /// Deletes the entry the confirmation dialog was opened for.
    pub fn confirm_delete(&mut self) {
        let AppMode::ConfirmDelete { entry, .. } = &self.mode else {
            return;
        };
        let path = self.full_path_of(entry);
        let refresh = self.current_path().clone();

        let service = Arc::clone(&self.service);
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let result = service.remove(path).await;
            let _ = events.send(AppEvent::ActionFinished { refresh, result });
        });

        self.mode = AppMode::Browse;
    }

    /// Opens the episode-rename confirmation, or reports an unparseable
    /// name through the error channel.
    fn begin_episode_rename(&mut self, entry: Entry) {
        match EpisodeInfo::parse(&entry.name) {
            Some(episode) => {
                self.mode = AppMode::ConfirmEpisodeRename {
                    entry,
                    episode,
                    selected_yes: true,
                };
            }
            None => {
                self.mode = AppMode::Browse;
                self.show_error(format!("Not a recognizable episode name: {}", entry.name));
            }
        }
    }

    /// Runs the server-side TV rename for the confirmed entry.
    pub fn confirm_episode_rename(&mut self) {
        let AppMode::ConfirmEpisodeRename { entry, .. } = &self.mode else {
            return;
        };
        let path = self.full_path_of(entry);

        let service = Arc::clone(&self.service);
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let result = service.rename_episode(path).await;
            let _ = events.send(AppEvent::EpisodeRenamed { result });
        });

        self.mode = AppMode::Browse;
    }

    /// Opens the new-directory input dialog.
    pub fn begin_mkdir(&mut self) {
        self.mode = AppMode::Mkdir {
            input: String::new(),
        };
    }

    /// Creates the directory named in the mkdir dialog under the current
    /// path; an empty name just closes the dialog.
    pub fn submit_mkdir(&mut self) {
        let AppMode::Mkdir { input } = &self.mode else {
            return;
        };
        if input.is_empty() {
            self.mode = AppMode::Browse;
            return;
        }
        let path = self.current_path().join(&format!("{input}/"));
        let refresh = self.current_path().clone();

        let service = Arc::clone(&self.service);
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let result = service.make_directory(path).await;
            let _ = events.send(AppEvent::ActionFinished { refresh, result });
        });

        self.mode = AppMode::Browse;
    }

    /// Downloads `entry` into the local downloads directory.
    fn download(&mut self, entry: &Entry) {
        let path = self.full_path_of(entry);
        let destination = service::download_destination(&entry.name);

        let service = Arc::clone(&self.service);
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let result = service.download(path, destination).await;
            let _ = events.send(AppEvent::DownloadFinished { result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::path::JailPath;
    use crate::infra::service::{MockServiceClient, ServiceError};

    async fn browsing_app(service: MockServiceClient) -> App {
        let mut app = App::new(
            Arc::new(service),
            JailPath::parse("/tv/").expect("path must parse"),
        );
        let event = app.next_app_event().await.expect("listing expected");
        app.apply_app_event(event);

        app
    }

    fn service_with_listing(entries: Vec<&'static str>) -> MockServiceClient {
        let mut service = MockServiceClient::new();
        service.expect_list().returning(move |_| {
            let entries = entries.clone();
            Box::pin(async move { Ok(entries.into_iter().map(Entry::new).collect()) })
        });

        service
    }

    #[tokio::test]
    async fn test_action_menu_skips_parent_entry() {
        // Arrange
        let mut app = browsing_app(service_with_listing(vec!["show.mkv"])).await;

        // Act
        app.open_action_menu(Entry::parent());

        // Assert
        assert!(!app.is_modal());
    }

    #[tokio::test]
    async fn test_move_submits_source_and_target() {
        // Arrange
        let mut service = service_with_listing(vec!["show.mkv"]);
        service
            .expect_move_entry()
            .withf(|source, target| {
                source.as_str() == "/tv/show.mkv" && target.as_str() == "/tv/show.mkv"
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        let mut app = browsing_app(service).await;

        // Act — submit without touching the editor: target equals source
        app.run_action(ActionKind::Move, Entry::new("show.mkv"));
        assert!(matches!(app.mode, AppMode::Move { .. }));
        app.submit_move();

        // Assert — dialog closed; the refresh lists the target's directory
        assert!(!app.is_modal());
        loop {
            let event = app.next_app_event().await.expect("event expected");
            let is_refresh = matches!(event, AppEvent::ActionFinished { .. });
            app.apply_app_event(event);
            if is_refresh {
                break;
            }
        }
        assert_eq!(app.error(), None);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation_then_removes() {
        // Arrange
        let mut service = service_with_listing(vec!["old/"]);
        service
            .expect_remove()
            .withf(|path| path.as_str() == "/tv/old/")
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let mut app = browsing_app(service).await;

        // Act
        app.run_action(ActionKind::Delete, Entry::new("old/"));
        assert!(matches!(
            app.mode,
            AppMode::ConfirmDelete {
                selected_yes: false,
                ..
            }
        ));
        app.confirm_delete();

        // Assert
        assert!(!app.is_modal());
        let event = app.next_app_event().await.expect("event expected");
        assert!(matches!(
            event,
            AppEvent::ActionFinished { result: Ok(()), .. }
        ));
    }

    #[tokio::test]
    async fn test_unparseable_episode_name_goes_to_error_channel() {
        // Arrange
        let mut app = browsing_app(service_with_listing(vec!["notes.txt"])).await;

        // Act
        app.run_action(ActionKind::RenameEpisode, Entry::new("notes.txt"));

        // Assert — no dialog, no service call
        assert!(!app.is_modal());
        assert_eq!(
            app.error(),
            Some("Not a recognizable episode name: notes.txt")
        );
    }

    #[tokio::test]
    async fn test_parseable_episode_name_opens_confirmation() {
        // Arrange
        let mut app = browsing_app(service_with_listing(vec!["show 3x06.mkv"])).await;

        // Act
        app.run_action(ActionKind::RenameEpisode, Entry::new("show 3x06.mkv"));

        // Assert
        let AppMode::ConfirmEpisodeRename { episode, .. } = &app.mode else {
            panic!("expected episode confirmation");
        };
        assert_eq!(episode.to_string(), "show 3x06");
    }

    #[tokio::test]
    async fn test_mkdir_creates_under_current_path() {
        // Arrange
        let mut service = service_with_listing(vec![]);
        service
            .expect_make_directory()
            .withf(|path| path.as_str() == "/tv/specials/")
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let mut app = browsing_app(service).await;

        // Act
        app.begin_mkdir();
        if let AppMode::Mkdir { input } = &mut app.mode {
            input.push_str("specials");
        }
        app.submit_mkdir();

        // Assert
        assert!(!app.is_modal());
        let event = app.next_app_event().await.expect("event expected");
        assert!(matches!(
            event,
            AppEvent::ActionFinished { result: Ok(()), .. }
        ));
    }

    #[tokio::test]
    async fn test_mkdir_with_empty_name_just_closes() {
        // Arrange
        let mut app = browsing_app(service_with_listing(vec![])).await;

        // Act
        app.begin_mkdir();
        app.submit_mkdir();

        // Assert
        assert!(!app.is_modal());
    }

    #[tokio::test]
    async fn test_failed_action_surfaces_backend_message() {
        // Arrange
        let mut service = service_with_listing(vec!["old/"]);
        service
            .expect_remove()
            .returning(|_| Box::pin(async { Err(ServiceError::Backend("no such path".to_string())) }));
        let mut app = browsing_app(service).await;

        // Act
        app.run_action(ActionKind::Delete, Entry::new("old/"));
        app.confirm_delete();
        let event = app.next_app_event().await.expect("event expected");
        app.apply_app_event(event);

        // Assert
        assert_eq!(app.error(), Some("no such path"));
    }
}
