//! Absolute-path arithmetic for the backend jail.
//!
//! Every path the client exchanges with the backend is absolute within the
//! jail and `/`-separated; a trailing `/` marks a directory. [`JailPath`] is
//! the validated form, and the free functions mirror the path operations the
//! backend expects (`join` never doubles a separator, `strip_last_component`
//! treats a trailing `/` as a directory marker rather than an empty segment).

use std::fmt;

use thiserror::Error;

/// Error raised when constructing a [`JailPath`] from malformed input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PathError {
    /// The input did not start with `/`.
    #[error("path must be absolute, got {0:?}")]
    NotAbsolute(String),
}

/// An absolute path inside the backend jail.
///
/// Invariant: the inner string always starts with `/`. A trailing `/` means
/// the path denotes a directory.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct JailPath(String);

impl JailPath {
    /// Returns the jail root `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Validates `raw` as an absolute jail path.
    ///
    /// # Errors
    /// Returns [`PathError::NotAbsolute`] when `raw` does not start with `/`.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if !raw.starts_with('/') {
            return Err(PathError::NotAbsolute(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this path denotes a directory (ends with `/`).
    pub fn is_directory(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Whether this path is the jail root.
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// The path with its final component removed, always a directory path.
    pub fn parent(&self) -> JailPath {
        JailPath(strip_last_component(&self.0))
    }

    /// Appends `part` with exactly one separator between.
    pub fn join(&self, part: &str) -> JailPath {
        JailPath(join(&[&self.0, part]))
    }

    /// Splits into ancestor segments and the trailing (possibly editable)
    /// name.
    ///
    /// The trailing name keeps its `/` when the path denotes a directory
    /// being handled whole; the root splits into no segments and an empty
    /// name.
    pub fn split(&self) -> (Vec<String>, String) {
        let dir = strip_last_component(&self.0);
        let trailing = self.0[dir.len()..].to_string();

        (dir_segments(&dir), trailing)
    }

    /// The final component, without any directory marker.
    pub fn file_name(&self) -> &str {
        let dir = strip_last_component(&self.0);

        self.0[dir.len()..].trim_end_matches('/')
    }
}

impl fmt::Display for JailPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Joins `parts` with exactly one `/` between them.
///
/// A part that is itself just `/` is collapsed unless it comes first, so the
/// root composes cleanly with anything that follows; parts already ending in
/// `/` gain no extra separator.
pub fn join(parts: &[&str]) -> String {
    let mut path = String::new();
    let last = parts.len().saturating_sub(1);

    for (index, part) in parts.iter().enumerate() {
        if *part == "/" && index != 0 {
            continue;
        }
        path.push_str(part);
        if !part.ends_with('/') && index != last {
            path.push('/');
        }
    }

    path
}

/// Strips the final `/`-terminated segment from `path`.
///
/// A path ending in `/` is a directory path: the component before that
/// trailing slash is stripped, not the empty string after it. Returns `/`
/// when no non-trailing separator exists.
pub fn strip_last_component(path: &str) -> String {
    let bytes = path.as_bytes();
    for index in (0..bytes.len()).rev() {
        if bytes[index] == b'/' && index != bytes.len() - 1 {
            return path[..=index].to_string();
        }
    }

    "/".to_string()
}

/// The non-empty components of a directory path, in order.
pub fn dir_segments(dir: &str) -> Vec<String> {
    dir.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
