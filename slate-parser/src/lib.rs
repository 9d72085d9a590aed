//! # slate
//!
//! Converts a constrained XML dialect into a small line-oriented
//! configuration language used for teaching.
//!
//! The pipeline has two stages. [`slate::parsing`] reads source text into a
//! plain element tree and enforces nothing beyond well-formedness.
//! [`slate::formats`] walks that tree once in document order and emits the
//! config dialect, binding `const` and dictionary `entry` values into a
//! symbol table that prefix expressions can reference. Everything is
//! sequential and a failure at any point aborts the whole conversion.
//!
//! ```rust
//! use slate_parser::slate::loader::DocumentLoader;
//!
//! let source = r#"
//!     <config>
//!       <const name="port" value="8080"/>
//!       <expr value="|+ port 1|"/>
//!     </config>"#;
//! let config = DocumentLoader::from_string(source).convert().unwrap();
//! assert_eq!(config, "(def port 8080)\n{{!-- |+ port 1| : 8081 --}}");
//! ```
//!
//! For testing guidelines, see the [testing module](slate::testing). Tests
//! assert on output lines through the fluent helpers there rather than on
//! substrings of the joined text.

pub mod slate;
