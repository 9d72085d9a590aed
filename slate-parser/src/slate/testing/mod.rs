//! Testing utilities for conversion output
//!
//! Output of the converter is line-oriented, so tests assert on lines, not
//! on substrings of the joined blob. The helpers here keep that convention
//! in one place:
//!
//! - [`convert_str`] / [`convert_err`] run the full pipeline on inline
//!   source and unwrap the expected side of the result with a readable
//!   panic on the other.
//! - [`assert_config`] starts a fluent, line-by-line assertion chain.
//! - [`workspace_path`] resolves sample documents under `docs/samples/`
//!   from any crate in the workspace.
//!
//! # Example
//!
//! ```rust,ignore
//! use slate_parser::slate::testing::{assert_config, convert_str};
//!
//! let output = convert_str(r#"<config><const name="a" value="1"/></config>"#);
//! assert_config(&output)
//!     .line_count(1)
//!     .line(0, "(def a 1)");
//! ```

use crate::slate::error::ConvertError;
use crate::slate::loader::{DocumentLoader, LoaderError};

/// Get a path relative to the workspace root for testing purposes.
///
/// In a workspace, `CARGO_MANIFEST_DIR` points to the crate directory
/// (slate-parser/), so we go up one level to reach the workspace root where
/// docs/ lives.
pub fn workspace_path(relative_path: &str) -> std::path::PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let workspace_root = std::path::Path::new(manifest_dir).parent().unwrap();
    workspace_root.join(relative_path)
}

/// Convert inline source, panicking with the error message on failure.
pub fn convert_str(source: &str) -> String {
    DocumentLoader::from_string(source)
        .convert()
        .unwrap_or_else(|err| panic!("conversion failed: {}", err))
}

/// Convert inline source that is expected to fail, returning the error.
pub fn convert_err(source: &str) -> ConvertError {
    match DocumentLoader::from_string(source).convert() {
        Ok(output) => panic!("conversion unexpectedly succeeded:\n{}", output),
        Err(LoaderError::Convert(err)) => err,
        Err(other) => panic!("expected a conversion error, got: {}", other),
    }
}

/// Create an assertion builder over converted output lines
pub fn assert_config(output: &str) -> ConfigAssert {
    ConfigAssert {
        lines: output.lines().map(String::from).collect(),
    }
}

/// Fluent line-by-line assertions over conversion output
///
/// Every method panics with the full output attached, so a failing test
/// shows what was actually emitted.
pub struct ConfigAssert {
    lines: Vec<String>,
}

impl ConfigAssert {
    /// Assert the exact number of output lines
    pub fn line_count(self, expected: usize) -> Self {
        if self.lines.len() != expected {
            panic!(
                "expected {} lines, found {}\n--- output ---\n{}",
                expected,
                self.lines.len(),
                self.lines.join("\n")
            );
        }
        self
    }

    /// Assert the exact content of one line
    pub fn line(self, index: usize, expected: &str) -> Self {
        match self.lines.get(index) {
            Some(actual) if actual == expected => self,
            Some(actual) => panic!(
                "line {}: expected {:?}, found {:?}\n--- output ---\n{}",
                index,
                expected,
                actual,
                self.lines.join("\n")
            ),
            None => panic!(
                "line {}: out of range, output has {} lines\n--- output ---\n{}",
                index,
                self.lines.len(),
                self.lines.join("\n")
            ),
        }
    }

    /// Assert that one line contains a fragment
    pub fn line_contains(self, index: usize, fragment: &str) -> Self {
        match self.lines.get(index) {
            Some(actual) if actual.contains(fragment) => self,
            Some(actual) => panic!(
                "line {}: expected to contain {:?}, found {:?}\n--- output ---\n{}",
                index,
                fragment,
                actual,
                self.lines.join("\n")
            ),
            None => panic!(
                "line {}: out of range, output has {} lines\n--- output ---\n{}",
                index,
                self.lines.len(),
                self.lines.join("\n")
            ),
        }
    }

    /// Assert that some line equals the expected text
    pub fn has_line(self, expected: &str) -> Self {
        if !self.lines.iter().any(|line| line == expected) {
            panic!(
                "no line equals {:?}\n--- output ---\n{}",
                expected,
                self.lines.join("\n")
            );
        }
        self
    }
}
