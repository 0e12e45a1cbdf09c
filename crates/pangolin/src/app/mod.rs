//! App-layer composition root and shared state container.
//!
//! This module wires app submodules and exposes [`App`], the single owner of
//! listing state, the current mode, and the error channel used by runtime
//! mode handlers and the renderer.

use std::path::PathBuf;
use std::sync::Arc;

use ratatui::widgets::TableState;
use tokio::sync::mpsc;

use crate::domain::entry::Entry;
use crate::domain::path::JailPath;
use crate::infra::service::{ServiceClient, ServiceError};
use crate::model::AppMode;

mod actions;
pub mod path_editor;

/// Internal app events emitted by background service calls.
///
/// Producers should emit events only; state mutation is centralized in
/// [`App::apply_app_events`]. Events carry the generation they were issued
/// under where results can be superseded.
#[derive(Debug)]
pub enum AppEvent {
    /// A directory listing resolved.
    ListingLoaded {
        generation: u64,
        path: JailPath,
        result: Result<Vec<Entry>, ServiceError>,
    },
    /// A sibling-directory fetch for one path-editor node resolved.
    EditorChoicesLoaded {
        generation: u64,
        node_index: usize,
        result: Result<Vec<Entry>, ServiceError>,
    },
    /// A move, remove, or mkdir finished; on success the listing at
    /// `refresh` is reloaded.
    ActionFinished {
        refresh: JailPath,
        result: Result<(), ServiceError>,
    },
    /// A TV episode rename finished, carrying the new path on success.
    EpisodeRenamed {
        result: Result<JailPath, ServiceError>,
    },
    /// A download finished, carrying the local destination on success.
    DownloadFinished {
        result: Result<PathBuf, ServiceError>,
    },
}

/// Stores application state and coordinates the browse and dialog workflows.
pub struct App {
    pub mode: AppMode,
    pub table_state: TableState,
    current_path: JailPath,
    entries: Vec<Entry>,
    listing_generation: u64,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    service: Arc<dyn ServiceClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Builds the app state and requests the initial listing of
    /// `start_path`.
    pub fn new(service: Arc<dyn ServiceClient>, start_path: JailPath) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            mode: AppMode::Browse,
            table_state: TableState::default(),
            current_path: JailPath::root(),
            entries: Vec::new(),
            listing_generation: 0,
            loading: false,
            error: None,
            notice: None,
            service,
            event_tx,
            event_rx,
        };
        app.list(start_path);

        app
    }

    /// The directory the listing currently shows.
    pub fn current_path(&self) -> &JailPath {
        &self.current_path
    }

    /// The visible listing, including the synthetic parent entry outside the
    /// root.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether a listing request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error channel's current message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The current success notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether a dialog currently owns the keyboard.
    pub fn is_modal(&self) -> bool {
        !matches!(self.mode, AppMode::Browse)
    }

    /// Replaces the error channel's message; any notice is dropped.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.notice = None;
    }

    /// Clears the error channel.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn show_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.error = None;
    }

    /// Requests the listing of `path`, superseding any outstanding request.
    pub fn list(&mut self, path: JailPath) {
        self.listing_generation += 1;
        self.loading = true;

        let generation = self.listing_generation;
        let service = Arc::clone(&self.service);
        let events = self.event_tx.clone();

        tokio::spawn(async move {
            let result = service.list(path.clone()).await;
            let _ = events.send(AppEvent::ListingLoaded {
                generation,
                path,
                result,
            });
        });
    }

    /// Reloads the current directory.
    pub fn refresh(&mut self) {
        self.list(self.current_path.clone());
    }

    /// Opens `entry`: descends into directories, ascends for the parent
    /// entry, ignores regular files.
    pub fn open_entry(&mut self, entry: &Entry) {
        if entry.is_parent() {
            self.list(self.current_path.parent());
        } else if entry.is_directory() {
            self.list(self.current_path.join(&entry.name));
        }
    }

    /// Navigates to the parent directory; a no-op at the root.
    pub fn open_parent(&mut self) {
        if !self.current_path.is_root() {
            self.list(self.current_path.parent());
        }
    }

    /// The entry under the selection bar.
    pub fn selected_entry(&self) -> Option<Entry> {
        self.table_state
            .selected()
            .and_then(|index| self.entries.get(index))
            .cloned()
    }

    /// The absolute path of `entry` within the current directory.
    pub fn full_path_of(&self, entry: &Entry) -> JailPath {
        self.current_path.join(&entry.name)
    }

    /// Moves selection to the next listing row.
    pub fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let index = match self.table_state.selected() {
            Some(index) if index >= self.entries.len() - 1 => 0,
            Some(index) => index + 1,
            None => 0,
        };
        self.table_state.select(Some(index));
    }

    /// Moves selection to the previous listing row.
    pub fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let index = match self.table_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(index) => index - 1,
        };
        self.table_state.select(Some(index));
    }

    /// Splits out the mode, listing slice, and table state for rendering.
    pub(crate) fn render_parts(&mut self) -> (&AppMode, &[Entry], &mut TableState) {
        (&self.mode, &self.entries, &mut self.table_state)
    }

    /// Applies all currently queued app events through a single reducer
    /// path.
    ///
    /// Events are applied in arrival order; generation tags inside the
    /// events decide which results still matter.
    pub(crate) fn apply_app_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    /// Waits for the next internal app event.
    pub async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Applies one app event to the state.
    pub fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ListingLoaded {
                generation,
                path,
                result,
            } => self.apply_listing(generation, path, result),
            AppEvent::EditorChoicesLoaded {
                generation,
                node_index,
                result,
            } => {
                if let AppMode::Move { editor, .. } = &mut self.mode {
                    if let Some(message) = editor.apply_choices(generation, node_index, result) {
                        self.show_error(message);
                    }
                } else {
                    tracing::debug!(node_index, "dropping sibling fetch for closed dialog");
                }
            }
            AppEvent::ActionFinished { refresh, result } => match result {
                Ok(()) => {
                    self.clear_error();
                    self.list(refresh);
                }
                Err(error) => self.show_error(error.to_string()),
            },
            AppEvent::EpisodeRenamed { result } => match result {
                Ok(new_path) => {
                    self.show_notice(format!("Renamed to {}", new_path.file_name()));
                    self.list(new_path.parent());
                }
                Err(error) => self.show_error(error.to_string()),
            },
            AppEvent::DownloadFinished { result } => match result {
                Ok(destination) => {
                    self.show_notice(format!("Downloaded to {}", destination.display()));
                }
                Err(error) => self.show_error(error.to_string()),
            },
        }
    }

    fn apply_listing(
        &mut self,
        generation: u64,
        path: JailPath,
        result: Result<Vec<Entry>, ServiceError>,
    ) {
        if generation != self.listing_generation {
            tracing::debug!(generation, "dropping stale listing");
            return;
        }
        self.loading = false;

        match result {
            Ok(mut entries) => {
                if !path.is_root() {
                    entries.insert(0, Entry::parent());
                }
                self.clear_error();
                self.current_path = path;
                if entries.is_empty() {
                    self.table_state.select(None);
                } else {
                    self.table_state.select(Some(0));
                }
                self.entries = entries;
            }
            Err(error) => self.show_error(error.to_string()),
        }
    }
}
