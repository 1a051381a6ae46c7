//! Pattern filter module
//!
//! Classifies report lines into the six line categories used by the
//! summary. Matching is a plain ordered substring search.

pub mod category;

pub use category::{
    contains_in_order, filter_lines, CategorizedLines, Direction, LineCategory,
};
