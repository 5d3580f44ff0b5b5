//! Docmodel - document keys and field paths
//!
//! Identity primitives for a document-oriented data model:
//!
//! - [`DocumentKey`]: absolute path naming one document (`rooms/eros`)
//! - [`FieldPath`]: path to a field inside a document (`address.city`)
//!
//! # Quick Start
//!
//! ```
//! use docmodel::{DocumentKey, FieldPath};
//!
//! let key = DocumentKey::from_path_string("rooms/eros/messages/1");
//! assert_eq!(key.document_id(), Some("1"));
//!
//! let field = FieldPath::parse_server_format("meta.`last.seen`");
//! assert_eq!(field.canonical_string(), "meta.`last.seen`");
//! ```
//!
//! # Error handling
//!
//! Constructors such as [`DocumentKey::from_path_string`] treat malformed
//! input as a bug and panic. Use the `try_*` variants, `FromStr` or serde
//! deserialization to get a [`PathError`] instead.

// Re-export the public API from docmodel-core
pub use docmodel_core::*;
