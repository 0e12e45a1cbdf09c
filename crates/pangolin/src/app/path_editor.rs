//! The breadcrumb path-editing control used by the move dialog.
//!
//! A [`PathEditor`] renders an absolute path as one selectable node per
//! ancestor segment plus a trailing editable name. Each node lazily fetches
//! the sibling directories of its prefix from the backend; picking a
//! candidate rebuilds the entire node sequence from the new prefix while the
//! trailing name is preserved. Rebuilding is synchronous, so the editor is
//! only ever observed in its viewing state; fetches that resolve for a
//! discarded sequence are recognized by generation tag and ignored.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::AppEvent;
use crate::domain::entry::Entry;
use crate::domain::path::{JailPath, dir_segments};
use crate::infra::service::{ServiceClient, ServiceError};

/// Which control of the editor currently has the keyboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditorFocus {
    Node(usize),
    Trailing,
}

/// One path-segment control: a choice of sibling directories under `prefix`.
pub struct BreadcrumbNode {
    prefix: JailPath,
    selected: String,
    candidates: Vec<String>,
    highlight: Option<usize>,
    loading: bool,
}

impl BreadcrumbNode {
    fn new(prefix: JailPath, selected: String) -> Self {
        Self {
            prefix,
            selected,
            candidates: Vec::new(),
            highlight: None,
            loading: true,
        }
    }

    /// The segment value this node currently shows.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Sibling directory candidates, empty until the fetch resolves.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Index of the highlighted candidate, if any.
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Whether the sibling fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn same_name(candidate: &str, selected: &str) -> bool {
        candidate.trim_end_matches('/') == selected.trim_end_matches('/')
    }
}

/// Breadcrumb editor for one absolute path.
pub struct PathEditor {
    dir: JailPath,
    trailing_name: String,
    editable_trailing: bool,
    nodes: Vec<BreadcrumbNode>,
    generation: u64,
    focus: EditorFocus,
    service: Arc<dyn ServiceClient>,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl PathEditor {
    /// Builds an editor for `path` and issues one sibling fetch per node.
    ///
    /// A path directly under the jail root still gets a single root node so
    /// top-level items can be moved between root directories.
    pub fn new(
        service: Arc<dyn ServiceClient>,
        events: mpsc::UnboundedSender<AppEvent>,
        path: &JailPath,
        editable_trailing: bool,
    ) -> Self {
        let (segments, trailing_name) = path.split();
        let mut editor = Self {
            dir: path.parent(),
            trailing_name,
            editable_trailing,
            nodes: Self::build_nodes(&segments),
            generation: 0,
            focus: EditorFocus::Node(0),
            service,
            events,
        };
        editor.spawn_fetches();

        editor
    }

    fn build_nodes(segments: &[String]) -> Vec<BreadcrumbNode> {
        if segments.is_empty() {
            // An item at the jail root: one synthetic node listing the root's
            // directories, so the item can still be moved down a level.
            return vec![BreadcrumbNode::new(JailPath::root(), "/".to_string())];
        }

        let mut prefix = JailPath::root();
        segments
            .iter()
            .map(|segment| {
                let node = BreadcrumbNode::new(prefix.clone(), segment.clone());
                prefix = prefix.join(&format!("{segment}/"));

                node
            })
            .collect()
    }

    fn spawn_fetches(&self) {
        for (node_index, node) in self.nodes.iter().enumerate() {
            let service = Arc::clone(&self.service);
            let events = self.events.clone();
            let prefix = node.prefix.clone();
            let generation = self.generation;

            tokio::spawn(async move {
                let result = service.list(prefix).await;
                let _ = events.send(AppEvent::EditorChoicesLoaded {
                    generation,
                    node_index,
                    result,
                });
            });
        }
    }

    /// Discards the node sequence and rebuilds it from `new_dir`.
    ///
    /// Bumping the generation here is what cancels in-flight fetches: their
    /// results arrive tagged with the old generation and are dropped by
    /// [`Self::apply_choices`]. The trailing name is untouched.
    fn rebuild(&mut self, new_dir: JailPath) {
        self.generation += 1;
        self.nodes = Self::build_nodes(&dir_segments(new_dir.as_str()));
        self.dir = new_dir;
        if let EditorFocus::Node(index) = self.focus {
            self.focus = EditorFocus::Node(index.min(self.nodes.len() - 1));
        }
        self.spawn_fetches();
    }

    /// Applies a resolved sibling fetch to the node that requested it.
    ///
    /// Results for a superseded generation or a vanished node are ignored.
    /// Returns the message to surface when the backend reported a failure;
    /// the node is left loading with no candidates in that case.
    pub fn apply_choices(
        &mut self,
        generation: u64,
        node_index: usize,
        result: Result<Vec<Entry>, ServiceError>,
    ) -> Option<String> {
        if generation != self.generation {
            tracing::debug!(generation, node_index, "dropping stale sibling fetch");
            return None;
        }
        let Some(node) = self.nodes.get_mut(node_index) else {
            tracing::debug!(node_index, "dropping sibling fetch for vanished node");
            return None;
        };

        match result {
            Ok(entries) => {
                let mut candidates: Vec<String> = entries
                    .iter()
                    .filter(|entry| entry.is_directory())
                    .map(|entry| entry.name.clone())
                    .collect();
                if node.prefix.is_root() {
                    // Keep the root itself selectable for moving items to
                    // the top level.
                    candidates.insert(0, "/".to_string());
                }
                node.highlight = candidates
                    .iter()
                    .position(|candidate| BreadcrumbNode::same_name(candidate, &node.selected));
                node.candidates = candidates;
                node.loading = false;

                None
            }
            Err(error) => {
                tracing::warn!(%error, node_index, "sibling fetch failed");

                Some(error.to_string())
            }
        }
    }

    /// Commits the focused node's highlighted candidate, rebuilding the
    /// sequence from the new prefix. Returns whether anything changed.
    pub fn commit_highlighted(&mut self) -> bool {
        let EditorFocus::Node(index) = self.focus else {
            return false;
        };
        let Some(node) = self.nodes.get(index) else {
            return false;
        };
        let Some(candidate) = node.highlight.and_then(|h| node.candidates.get(h)) else {
            return false;
        };

        let new_prefix = node.prefix.join(candidate);
        self.rebuild(new_prefix);

        true
    }

    /// Moves the highlight down within the focused node's candidates.
    pub fn highlight_next(&mut self) {
        if let Some(node) = self.focused_node_mut()
            && !node.candidates.is_empty()
        {
            node.highlight = Some(match node.highlight {
                Some(index) => (index + 1).min(node.candidates.len() - 1),
                None => 0,
            });
        }
    }

    /// Moves the highlight up within the focused node's candidates.
    pub fn highlight_previous(&mut self) {
        if let Some(node) = self.focused_node_mut()
            && !node.candidates.is_empty()
        {
            node.highlight = Some(match node.highlight {
                Some(index) => index.saturating_sub(1),
                None => 0,
            });
        }
    }

    /// Moves focus one control to the right (last stop: the trailing name).
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            EditorFocus::Node(index) if index + 1 < self.nodes.len() => {
                EditorFocus::Node(index + 1)
            }
            EditorFocus::Node(_) => EditorFocus::Trailing,
            EditorFocus::Trailing => EditorFocus::Trailing,
        };
    }

    /// Moves focus one control to the left.
    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            EditorFocus::Trailing => EditorFocus::Node(self.nodes.len() - 1),
            EditorFocus::Node(index) => EditorFocus::Node(index.saturating_sub(1)),
        };
    }

    /// Appends to the trailing name; a no-op when it is not editable.
    pub fn push_trailing(&mut self, character: char) {
        if self.editable_trailing && character != '/' {
            self.trailing_name.push(character);
        }
    }

    /// Removes the last character of the trailing name.
    pub fn pop_trailing(&mut self) {
        if self.editable_trailing {
            self.trailing_name.pop();
        }
    }

    /// The currently composed path: all node selections plus the trailing
    /// name.
    pub fn get_path(&self) -> JailPath {
        self.dir.join(&self.trailing_name)
    }

    pub fn nodes(&self) -> &[BreadcrumbNode] {
        &self.nodes
    }

    pub fn trailing_name(&self) -> &str {
        &self.trailing_name
    }

    pub fn is_trailing_editable(&self) -> bool {
        self.editable_trailing
    }

    pub fn focus(&self) -> EditorFocus {
        self.focus
    }

    /// The focused node, when focus is not on the trailing name.
    pub fn focused_node(&self) -> Option<&BreadcrumbNode> {
        match self.focus {
            EditorFocus::Node(index) => self.nodes.get(index),
            EditorFocus::Trailing => None,
        }
    }

    fn focused_node_mut(&mut self) -> Option<&mut BreadcrumbNode> {
        match self.focus {
            EditorFocus::Node(index) => self.nodes.get_mut(index),
            EditorFocus::Trailing => None,
        }
    }

    #[cfg(test)]
    fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::service::MockServiceClient;

    fn editor_with_entries(
        path: &str,
        expected_fetches: usize,
        entries: Vec<&'static str>,
    ) -> (PathEditor, mpsc::UnboundedReceiver<AppEvent>) {
        let mut service = MockServiceClient::new();
        service
            .expect_list()
            .times(expected_fetches)
            .returning(move |_| {
                let entries = entries.clone();
                Box::pin(async move { Ok(entries.into_iter().map(Entry::new).collect()) })
            });
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let path = JailPath::parse(path).expect("test path must parse");
        let editor = PathEditor::new(Arc::new(service), event_tx, &path, true);

        (editor, event_rx)
    }

    async fn drain_choices(editor: &mut PathEditor, event_rx: &mut mpsc::UnboundedReceiver<AppEvent>) {
        for _ in 0..editor.nodes().len() {
            let event = event_rx.recv().await.expect("fetch event expected");
            let AppEvent::EditorChoicesLoaded {
                generation,
                node_index,
                result,
            } = event
            else {
                continue;
            };
            editor.apply_choices(generation, node_index, result);
        }
    }

    #[tokio::test]
    async fn test_decorate_builds_one_node_per_ancestor_segment() {
        // Arrange & Act
        let (editor, _event_rx) = editor_with_entries("/movies/tv/show.mkv", 2, vec![]);

        // Assert
        assert_eq!(editor.nodes().len(), 2);
        assert_eq!(editor.nodes()[0].selected(), "movies");
        assert_eq!(editor.nodes()[1].selected(), "tv");
        assert_eq!(editor.trailing_name(), "show.mkv");
        assert!(editor.nodes().iter().all(BreadcrumbNode::is_loading));
    }

    #[tokio::test]
    async fn test_decorate_root_item_gets_synthetic_root_node() {
        // Arrange & Act
        let (editor, _event_rx) = editor_with_entries("/file.txt", 1, vec![]);

        // Assert
        assert_eq!(editor.nodes().len(), 1);
        assert_eq!(editor.nodes()[0].selected(), "/");
        assert_eq!(editor.trailing_name(), "file.txt");
    }

    #[tokio::test]
    async fn test_choices_filter_to_directories_and_preselect() {
        // Arrange
        let (mut editor, mut event_rx) = editor_with_entries(
            "/movies/show.mkv",
            1,
            vec!["movies/", "tv/", "loose-file.txt"],
        );

        // Act
        drain_choices(&mut editor, &mut event_rx).await;

        // Assert — non-directories are gone, the root candidate is
        // prepended, and the current segment is highlighted
        let node = &editor.nodes()[0];
        assert!(!node.is_loading());
        assert_eq!(node.candidates(), ["/", "movies/", "tv/"]);
        assert_eq!(node.highlight(), Some(1));
    }

    #[tokio::test]
    async fn test_absent_previous_selection_highlights_nothing() {
        // Arrange
        let (mut editor, mut event_rx) =
            editor_with_entries("/gone/show.mkv", 1, vec!["movies/", "tv/"]);

        // Act
        drain_choices(&mut editor, &mut event_rx).await;

        // Assert
        assert_eq!(editor.nodes()[0].highlight(), None);
    }

    #[tokio::test]
    async fn test_commit_rebuilds_sequence_and_preserves_trailing_name() {
        // Arrange — 2 initial fetches, then 1 more for the rebuilt node
        let (mut editor, mut event_rx) =
            editor_with_entries("/movies/tv/show.mkv", 3, vec!["movies/", "tv/"]);
        drain_choices(&mut editor, &mut event_rx).await;
        let generation_before = editor.generation();

        // Act — commit "movies/" in the first node, collapsing the
        // sequence to a single rebuilt node
        editor.focus_previous();
        assert_eq!(editor.focus(), EditorFocus::Node(0));
        let changed = editor.commit_highlighted();

        // Assert
        assert!(changed);
        assert_eq!(editor.generation(), generation_before + 1);
        assert_eq!(editor.nodes().len(), 1);
        assert_eq!(editor.nodes()[0].selected(), "movies");
        assert_eq!(editor.trailing_name(), "show.mkv");
        assert_eq!(editor.get_path().as_str(), "/movies/show.mkv");
    }

    #[tokio::test]
    async fn test_stale_generation_fetch_is_ignored() {
        // Arrange
        let (mut editor, mut event_rx) =
            editor_with_entries("/movies/tv/show.mkv", 3, vec!["movies/", "tv/"]);
        drain_choices(&mut editor, &mut event_rx).await;
        editor.focus_previous();
        editor.highlight_next();
        editor.commit_highlighted();

        // Act — a fetch from the discarded sequence resolves late
        let message = editor.apply_choices(0, 1, Ok(vec![Entry::new("stale/")]));

        // Assert — the rebuilt node is untouched
        assert_eq!(message, None);
        assert_eq!(editor.nodes().len(), 1);
        assert!(editor.nodes()[0].is_loading());
        assert!(editor.nodes()[0].candidates().is_empty());
    }

    #[tokio::test]
    async fn test_backend_error_surfaces_message_and_leaves_node_loading() {
        // Arrange
        let (mut editor, _event_rx) = editor_with_entries("/movies/show.mkv", 1, vec![]);

        // Act
        let message = editor.apply_choices(0, 0, Err(ServiceError::Backend("boom".to_string())));

        // Assert — no timeout or retry: the node simply stays loading
        assert_eq!(message, Some("boom".to_string()));
        assert!(editor.nodes()[0].is_loading());
        assert!(editor.nodes()[0].candidates().is_empty());
    }

    #[tokio::test]
    async fn test_trailing_edits_do_not_rebuild() {
        // Arrange
        let (mut editor, _event_rx) = editor_with_entries("/movies/tv/show.mkv", 2, vec![]);
        let generation_before = editor.generation();

        // Act
        editor.focus_next();
        editor.focus_next();
        assert_eq!(editor.focus(), EditorFocus::Trailing);
        editor.pop_trailing();
        editor.push_trailing('4');

        // Assert
        assert_eq!(editor.generation(), generation_before);
        assert_eq!(editor.trailing_name(), "show.mk4");
        assert_eq!(editor.get_path().as_str(), "/movies/tv/show.mk4");
    }

    #[tokio::test]
    async fn test_trailing_rejects_separator_characters() {
        // Arrange
        let (mut editor, _event_rx) = editor_with_entries("/movies/show.mkv", 1, vec![]);

        // Act
        editor.push_trailing('/');

        // Assert
        assert_eq!(editor.trailing_name(), "show.mkv");
    }

    #[tokio::test]
    async fn test_commit_selecting_root_moves_to_root() {
        // Arrange
        let (mut editor, mut event_rx) =
            editor_with_entries("/movies/show.mkv", 2, vec!["movies/", "tv/"]);
        drain_choices(&mut editor, &mut event_rx).await;

        // Act — highlight the synthetic "/" candidate and commit
        editor.highlight_previous();
        let node = editor.focused_node().expect("node focused");
        assert_eq!(node.highlight(), Some(0));
        editor.commit_highlighted();

        // Assert
        assert_eq!(editor.nodes().len(), 1);
        assert_eq!(editor.nodes()[0].selected(), "/");
        assert_eq!(editor.get_path().as_str(), "/show.mkv");
    }
}
