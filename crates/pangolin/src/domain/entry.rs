//! Directory listing entries as the backend reports them.

/// Synthetic entry the app prepends to non-root listings for navigating up.
pub const PARENT_ENTRY: &str = "../";

/// One entry in a directory listing.
///
/// The backend sends plain names without any path prefix; a name ending in
/// `/` denotes a directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub name: String,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The synthetic parent-directory entry.
    pub fn parent() -> Self {
        Self::new(PARENT_ENTRY)
    }

    /// Whether this entry names a directory.
    pub fn is_directory(&self) -> bool {
        self.name.ends_with('/')
    }

    /// Whether this is the synthetic parent-directory entry.
    pub fn is_parent(&self) -> bool {
        self.name == PARENT_ENTRY
    }
}
