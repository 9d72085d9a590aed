//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading source text
//! from files or strings and running the conversion pipeline on it. It is
//! used by both production code and tests.
//!
//! # Example
//!
//! ```rust
//! use slate_parser::slate::loader::DocumentLoader;
//!
//! // From file
//! let loader = DocumentLoader::from_path("docs/samples/server.xml").unwrap();
//! let config = loader.convert().unwrap();
//!
//! // From string
//! let loader = DocumentLoader::from_string(r#"<config><const name="a" value="1"/></config>"#);
//! let config = loader.convert().unwrap();
//! ```

use crate::slate::document::Element;
use crate::slate::error::ConvertError;
use crate::slate::formats::serialize_document;
use crate::slate::parsing::parse_document;
use std::fs;
use std::path::Path;

/// Error that can occur when loading documents
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the file
    IoError(String),
    /// Conversion error from the parse or serialize stage
    Convert(ConvertError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Convert(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<ConvertError> for LoaderError {
    fn from(err: ConvertError) -> Self {
        LoaderError::Convert(err)
    }
}

/// Document loader with pipeline shortcuts
///
/// `DocumentLoader` provides a convenient API for loading source text and
/// converting it. The two stages are exposed separately so callers can stop
/// at the parsed tree when they only need structure.
///
/// # Example
///
/// ```rust
/// use slate_parser::slate::loader::DocumentLoader;
///
/// // Load from file and convert
/// let config = DocumentLoader::from_path("docs/samples/server.xml")
///     .unwrap()
///     .convert()
///     .unwrap();
///
/// // Load from string and stop at the tree
/// let root = DocumentLoader::from_string("<config/>")
///     .parse()
///     .unwrap();
/// ```
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Parse the source into an element tree
    pub fn parse(&self) -> Result<Element, LoaderError> {
        Ok(parse_document(&self.source)?)
    }

    /// Run the full conversion: parse the source and serialize the tree
    /// into the config dialect
    pub fn convert(&self) -> Result<String, LoaderError> {
        let root = self.parse()?;
        Ok(serialize_document(&root)?)
    }

    /// Get the raw source string
    pub fn source(&self) -> String {
        self.source.clone()
    }

    /// Get a reference to the raw source string
    ///
    /// Use this when you don't need an owned copy.
    pub fn source_ref(&self) -> &str {
        &self.source
    }
}
