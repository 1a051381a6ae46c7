//! Report input module
//!
//! Loads a fio text report into memory as an ordered list of lines.

pub mod loader;

pub use loader::{lines_from_str, load_lines};
