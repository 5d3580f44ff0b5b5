//! Field paths
//!
//! A [`FieldPath`] names a (possibly nested) field inside a document, one
//! segment per nesting level. Field names may contain any character, so the
//! textual form needs quoting:
//!
//! # Server format
//!
//! | Syntax | Meaning | Example | Segments |
//! |--------|---------|---------|----------|
//! | `a.b` | Nested field | `address.city` | `["address", "city"]` |
//! | `` `...` `` | Literal run, `.` is not a separator | `` `a.b` `` | `["a.b"]` |
//! | `\c` | `c` taken literally | `a\.b` | `["a.b"]` |
//!
//! Parsing stops at the first NUL character. Empty segments, an unclosed
//! backtick and a trailing backslash are rejected.
//!
//! # Canonical string
//!
//! [`FieldPath::canonical_string`] escapes `\` and `` ` `` in each segment,
//! wraps every segment that is not a plain identifier in backticks, and joins
//! the segments with `.`. The result parses back to the same segments.

use crate::error::{expect_valid, PathError, Result};
use crate::path::BasePath;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reserved field name that stands for the document's own key
pub const KEY_FIELD_NAME: &str = "__name__";

/// Separator between field path segments
pub const FIELD_SEPARATOR: char = '.';

const BACKTICK: char = '`';
const ESCAPE: char = '\\';

/// Path to a field within a document
///
/// Ordered lexicographically by segment.
///
/// # Examples
///
/// ```
/// use docmodel_core::{BasePath, FieldPath};
///
/// let path = FieldPath::parse_server_format("address.`zip code`");
/// assert_eq!(path.segments(), ["address", "zip code"]);
/// assert_eq!(path.canonical_string(), "address.`zip code`");
///
/// assert!(FieldPath::key_field_path().is_key_field_path());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Create the empty field path
    pub fn empty() -> Self {
        FieldPath {
            segments: Vec::new(),
        }
    }

    /// Create a field path from exactly the given segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldPath {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse server-format text, failing fast on malformed input
    #[track_caller]
    pub fn parse_server_format(path: &str) -> Self {
        expect_valid(Self::try_parse_server_format(path))
    }

    /// Parse server-format text
    ///
    /// Single pass over the input. Errors carry the whole input text,
    /// including anything after an embedded NUL.
    pub fn try_parse_server_format(path: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut segment = String::with_capacity(path.len());

        let mut finish_segment = |segment: &mut String| -> Result<()> {
            if segment.is_empty() {
                return Err(PathError::EmptySegment(path.to_string()));
            }
            segments.push(std::mem::take(segment));
            Ok(())
        };

        let mut inside_backticks = false;
        let mut escaped_next = false;

        for c in path.chars() {
            // Input ends at the first NUL, as it would for a C string
            if c == '\0' {
                break;
            }
            if escaped_next {
                escaped_next = false;
                segment.push(c);
                continue;
            }
            match c {
                FIELD_SEPARATOR if !inside_backticks => finish_segment(&mut segment)?,
                BACKTICK => inside_backticks = !inside_backticks,
                ESCAPE => escaped_next = true,
                _ => segment.push(c),
            }
        }
        finish_segment(&mut segment)?;

        if inside_backticks {
            return Err(PathError::UnterminatedBacktick(path.to_string()));
        }
        if escaped_next {
            return Err(PathError::TrailingEscape(path.to_string()));
        }

        Ok(FieldPath { segments })
    }

    /// The sentinel path referring to the document key (`__name__`)
    pub fn key_field_path() -> Self {
        FieldPath {
            segments: vec![KEY_FIELD_NAME.to_string()],
        }
    }

    /// True if this is exactly the key field path
    pub fn is_key_field_path(&self) -> bool {
        matches!(self.segments.as_slice(), [only] if only == KEY_FIELD_NAME)
    }

    /// Escaped, selectively quoted segments joined with `.`
    pub fn canonical_string(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(FIELD_SEPARATOR);
            }
            out.push_str(&escaped_segment(segment));
        }
        out
    }
}

/// True if `segment` can appear in a canonical string without quoting
fn is_valid_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Escape `\` and `` ` `` in one pass, then quote unless a plain identifier
fn escaped_segment(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len() + 2);
    for c in segment.chars() {
        if c == ESCAPE || c == BACKTICK {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }

    if !is_valid_identifier(&escaped) {
        escaped.insert(0, BACKTICK);
        escaped.push(BACKTICK);
    }
    escaped
}

impl BasePath for FieldPath {
    fn with_segments(segments: Vec<String>) -> Self {
        FieldPath { segments }
    }

    fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse_server_format(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}
