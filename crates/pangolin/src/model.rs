//! UI modes and the action menu model.

use crate::app::path_editor::PathEditor;
use crate::domain::entry::Entry;
use crate::domain::episode::EpisodeInfo;

/// Which overlay, if any, currently owns the keyboard.
///
/// `Browse` is the only non-modal mode; every dialog variant keeps its own
/// state here so closing a dialog is just a reassignment and the dialog's
/// resources (including any in-flight editor fetches) are dropped with it.
pub enum AppMode {
    Browse,
    ActionMenu {
        entry: Entry,
        actions: Vec<ActionKind>,
        selected: usize,
    },
    Move {
        source: Entry,
        editor: PathEditor,
    },
    ConfirmDelete {
        entry: Entry,
        selected_yes: bool,
    },
    ConfirmEpisodeRename {
        entry: Entry,
        episode: EpisodeInfo,
        selected_yes: bool,
    },
    Mkdir {
        input: String,
    },
    Help,
}

/// The operations the action menu can perform on an entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionKind {
    Open,
    Move,
    Delete,
    RenameEpisode,
    Download,
}

impl ActionKind {
    const ALL: &[ActionKind] = &[
        ActionKind::Open,
        ActionKind::Move,
        ActionKind::Delete,
        ActionKind::RenameEpisode,
        ActionKind::Download,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Open => "Open",
            ActionKind::Move => "Move",
            ActionKind::Delete => "Delete",
            ActionKind::RenameEpisode => "Rename TV Episode",
            ActionKind::Download => "Download",
        }
    }

    /// Whether this action applies to `entry`.
    ///
    /// Only directories can be opened; only regular files can be downloaded
    /// or renamed as episodes.
    fn applies_to(self, entry: &Entry) -> bool {
        match self {
            ActionKind::Open => entry.is_directory(),
            ActionKind::Move | ActionKind::Delete => true,
            ActionKind::RenameEpisode | ActionKind::Download => !entry.is_directory(),
        }
    }

    /// The menu entries offered for `entry`, in display order.
    pub fn available_for(entry: &Entry) -> Vec<ActionKind> {
        Self::ALL
            .iter()
            .copied()
            .filter(|action| action.applies_to(entry))
            .collect()
    }
}
