//! Segment-list paths
//!
//! Both resource paths (`rooms/eros/messages/1`) and field paths
//! (`address.city`) are ordered lists of string segments. [`BasePath`]
//! holds the behaviour they share; the concrete types decide how the
//! segments are rendered as text.
//!
//! Paths are immutable values: every operation that "changes" a path
//! returns a new one.

mod resource_path;

pub use resource_path::{ResourcePath, PATH_SEPARATOR};

/// Shared behaviour of segment-list paths
///
/// Implementors only provide construction from and access to their
/// segment vector. Ordering is expected to be the lexicographic order of
/// the segment vector, which is what `#[derive(Ord)]` on a
/// `Vec<String>` field produces (segments compare byte-wise).
pub trait BasePath: Sized {
    /// Build a path that owns exactly `segments`
    fn with_segments(segments: Vec<String>) -> Self;

    /// The ordered segments of this path
    fn segments(&self) -> &[String];

    /// Number of segments
    fn len(&self) -> usize {
        self.segments().len()
    }

    /// True if the path has no segments
    fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }

    /// First segment, if any
    fn first_segment(&self) -> Option<&str> {
        self.segments().first().map(String::as_str)
    }

    /// Last segment, if any
    fn last_segment(&self) -> Option<&str> {
        self.segments().last().map(String::as_str)
    }

    /// Segment at `index`, if in range
    fn segment(&self, index: usize) -> Option<&str> {
        self.segments().get(index).map(String::as_str)
    }

    /// New path with `segment` appended
    fn append(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments().to_vec();
        segments.push(segment.into());
        Self::with_segments(segments)
    }

    /// New path with all of `other`'s segments appended
    fn append_path(&self, other: &Self) -> Self {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(self.segments());
        segments.extend_from_slice(other.segments());
        Self::with_segments(segments)
    }

    /// New path without the first segment (None if empty)
    fn without_first(&self) -> Option<Self> {
        self.without_first_n(1)
    }

    /// New path without the first `n` segments (None if shorter than `n`)
    fn without_first_n(&self, n: usize) -> Option<Self> {
        if n > self.len() {
            return None;
        }
        Some(Self::with_segments(self.segments()[n..].to_vec()))
    }

    /// New path without the last segment (None if empty)
    fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments().split_last()?;
        Some(Self::with_segments(rest.to_vec()))
    }

    /// True if every segment of `self` matches the start of `other`
    ///
    /// A path is a prefix of itself; the empty path is a prefix of all paths.
    fn is_prefix_of(&self, other: &Self) -> bool {
        other.segments().starts_with(self.segments())
    }

    /// True if `other` is exactly one segment longer and starts with `self`
    fn is_immediate_parent_of(&self, other: &Self) -> bool {
        self.len() + 1 == other.len() && self.is_prefix_of(other)
    }
}
