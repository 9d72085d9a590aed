//! Output format implementations
//!
//! The config dialect serializer lives here. Parsing is the inverse
//! direction and lives in [`crate::slate::parsing`].

pub mod serializer;

pub use serializer::{serialize_document, COMMENT_END, COMMENT_START};
