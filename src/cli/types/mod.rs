//! Type-safe wrappers and enums for CLI input.

pub mod ids;
pub mod variant;

pub use ids::{MatchId, MatchIdList};
pub use variant::RubricVariant;
