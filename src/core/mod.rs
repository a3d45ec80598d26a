//! Core utilities shared across commands
//!
//! - `fs`: config file locations and tolerant file reads

pub mod fs;

// Re-export commonly used items for convenience
pub use fs::{default_rubric_path, try_read_to_string};
