//! Main module for slate library functionality

pub mod document;
pub mod error;
pub mod eval;
pub mod formats;
pub mod loader;
pub mod parsing;
pub mod symbols;
pub mod testing;
