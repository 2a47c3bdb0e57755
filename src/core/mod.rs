//! Core module for projectify
//!
//! Shared types and the file scanner that feeds the fact collector.

pub mod scanner;
mod types;

pub use scanner::discover_files;
pub use types::*;
pub(crate) use types::{serialize_path, serialize_path_keys};
