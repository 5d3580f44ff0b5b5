//! Core identity types for documents and fields
//!
//! This crate defines the path-based identifiers used throughout the data model:
//! - ResourcePath: Slash-separated path to a collection or document
//! - BasePath: Behaviour shared by all segment-list paths
//! - DocumentKey: Validated path naming exactly one document
//! - FieldPath: Path to a field inside a document, with server-format parsing
//!   and canonical (escaped) serialization
//! - PathError: Error type for invalid keys and malformed paths

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod document_key;
pub mod error;
pub mod field_path;
pub mod path;

// Re-export commonly used types and traits
pub use document_key::DocumentKey;
pub use error::{PathError, Result};
pub use field_path::{FieldPath, FIELD_SEPARATOR, KEY_FIELD_NAME};
pub use path::{BasePath, ResourcePath, PATH_SEPARATOR};
