//! Slash-separated resource paths
//!
//! A `ResourcePath` locates a collection or document, e.g.
//! `rooms/eros/messages/1`. It is the storage behind
//! [`DocumentKey`](crate::DocumentKey).

use crate::error::{expect_valid, PathError, Result};
use crate::path::BasePath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between resource path segments
pub const PATH_SEPARATOR: char = '/';

/// Path to a collection or document
///
/// Ordered lexicographically by segment.
///
/// # Examples
///
/// ```
/// use docmodel_core::{BasePath, ResourcePath};
///
/// let path = ResourcePath::from_string("/rooms/eros/");
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.canonical_string(), "rooms/eros");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Create the empty path (zero segments)
    pub fn new() -> Self {
        ResourcePath {
            segments: Vec::new(),
        }
    }

    /// Create a path from exactly the given segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResourcePath {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse slash-separated text, failing fast on `//`
    #[track_caller]
    pub fn from_string(path: &str) -> Self {
        expect_valid(Self::try_from_string(path))
    }

    /// Parse slash-separated text
    ///
    /// Empty segments produced by a leading or trailing `/` are skipped.
    /// Segments are taken verbatim; no escape sequences are interpreted.
    pub fn try_from_string(path: &str) -> Result<Self> {
        if path.contains("//") {
            return Err(PathError::DoubleSlash(path.to_string()));
        }
        Ok(ResourcePath {
            segments: path
                .split(PATH_SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    /// Segments joined with `/`
    pub fn canonical_string(&self) -> String {
        self.segments.join("/")
    }
}

impl BasePath for ResourcePath {
    fn with_segments(segments: Vec<String>) -> Self {
        ResourcePath { segments }
    }

    fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}
