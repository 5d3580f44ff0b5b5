//! Document keys
//!
//! A [`DocumentKey`] identifies exactly one document by its absolute
//! resource path. The path alternates collection and document names, so a
//! valid key always has an even number of segments:
//!
//! ```text
//! rooms/eros                  -> document "eros" in collection "rooms"
//! rooms/eros/messages/1       -> document "1" in subcollection "messages"
//! rooms                       -> not a document key (collection path)
//! ```
//!
//! Keys share their path storage through an `Arc`, so cloning a key never
//! copies segments.
//!
//! Serialized keys are segment lists, not path strings: segments built with
//! [`DocumentKey::from_segments`] may contain `/` or be empty, and the joined
//! text would not read back as the same key.

use crate::error::{expect_valid, PathError, Result};
use crate::path::{BasePath, ResourcePath};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Process-wide empty key, created on first access and never dropped
static EMPTY_KEY: Lazy<DocumentKey> = Lazy::new(|| {
    tracing::trace!("initializing empty document key");
    DocumentKey::default()
});

/// Key identifying a single document
///
/// Immutable after construction. Equality, ordering and hashing all
/// delegate to the underlying [`ResourcePath`].
///
/// # Examples
///
/// ```
/// use docmodel_core::DocumentKey;
///
/// let key = DocumentKey::from_path_string("rooms/eros");
/// assert_eq!(key.document_id(), Some("eros"));
///
/// assert!(DocumentKey::try_from_path_string("rooms").is_err());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DocumentKey {
    // None only after `take`; `path()` then falls back to the empty key.
    path: Option<Arc<ResourcePath>>,
}

impl DocumentKey {
    /// Create a key from `path`, failing fast if the segment count is odd
    ///
    /// Pass `path.clone()` to keep using the original path.
    #[track_caller]
    pub fn new(path: ResourcePath) -> Self {
        expect_valid(Self::try_new(path))
    }

    /// Create a key from `path`, rejecting odd segment counts
    pub fn try_new(path: ResourcePath) -> Result<Self> {
        Self::try_from_shared(Arc::new(path))
    }

    /// Create a key that shares already allocated path storage
    #[track_caller]
    pub fn from_shared(path: Arc<ResourcePath>) -> Self {
        expect_valid(Self::try_from_shared(path))
    }

    /// Fallible form of [`DocumentKey::from_shared`]
    pub fn try_from_shared(path: Arc<ResourcePath>) -> Result<Self> {
        if !Self::is_document_key(&path) {
            return Err(PathError::InvalidDocumentKey(path.canonical_string()));
        }
        Ok(DocumentKey { path: Some(path) })
    }

    /// Parse a slash-separated path string into a key, failing fast
    #[track_caller]
    pub fn from_path_string(path: &str) -> Self {
        expect_valid(Self::try_from_path_string(path))
    }

    /// Parse a slash-separated path string into a key
    pub fn try_from_path_string(path: &str) -> Result<Self> {
        Self::try_new(ResourcePath::try_from_string(path)?)
    }

    /// Build a key from exactly the given segments, failing fast
    #[track_caller]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ResourcePath::from_segments(segments))
    }

    /// Fallible form of [`DocumentKey::from_segments`]
    pub fn try_from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::try_new(ResourcePath::from_segments(segments))
    }

    /// The shared empty key
    ///
    /// Every call returns the same instance, from any thread.
    pub fn empty() -> &'static DocumentKey {
        &EMPTY_KEY
    }

    /// True if `path` can name a document (even segment count)
    pub fn is_document_key(path: &ResourcePath) -> bool {
        path.len() % 2 == 0
    }

    /// The path of this key
    ///
    /// A key whose storage was moved out by [`DocumentKey::take`] reports
    /// the empty key's path.
    pub fn path(&self) -> &ResourcePath {
        match &self.path {
            Some(path) => path.as_ref(),
            None => DocumentKey::empty().path(),
        }
    }

    /// Move this key's storage into a new key, leaving `self` unset
    pub fn take(&mut self) -> DocumentKey {
        DocumentKey {
            path: self.path.take(),
        }
    }

    /// Name of the document within its collection (None for the empty key)
    pub fn document_id(&self) -> Option<&str> {
        self.path().last_segment()
    }

    /// Path of the collection containing the document (None for the empty key)
    pub fn collection_path(&self) -> Option<ResourcePath> {
        self.path().parent()
    }
}

impl Default for DocumentKey {
    fn default() -> Self {
        DocumentKey {
            path: Some(Arc::new(ResourcePath::new())),
        }
    }
}

impl PartialEq for DocumentKey {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl Eq for DocumentKey {}

// Ordering delegates to the path: segment by segment, byte-wise
impl Ord for DocumentKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path().cmp(other.path())
    }
}

impl PartialOrd for DocumentKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for DocumentKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path().hash(state);
    }
}

impl fmt::Debug for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentKey({})", self.path())
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl TryFrom<String> for DocumentKey {
    type Error = PathError;

    fn try_from(path: String) -> Result<Self> {
        Self::try_from_path_string(&path)
    }
}

impl From<DocumentKey> for String {
    fn from(key: DocumentKey) -> Self {
        key.path().canonical_string()
    }
}

impl TryFrom<Vec<String>> for DocumentKey {
    type Error = PathError;

    fn try_from(segments: Vec<String>) -> Result<Self> {
        Self::try_new(ResourcePath::with_segments(segments))
    }
}

impl From<DocumentKey> for Vec<String> {
    fn from(key: DocumentKey) -> Self {
        key.path().segments().to_vec()
    }
}
