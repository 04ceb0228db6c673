//! Formatter implementations

pub mod ljson;
pub mod text;

pub use ljson::LjsonFormatter;
pub use text::TextFormatter;

// Re-export traits for convenience
pub use crate::core::{Formatter, Freeform};
