//! Fantasy scoring engines.
//!
//! - `rubric`: point weights and variant presets
//! - `player`: per-match player scores and running player totals
//! - `team`: per-match team increments and running team totals

pub mod player;
pub mod rubric;
pub mod team;

pub use player::{compute_match_score, round2, score, MatchScore, PlayerAggregate, PlayerTable};
pub use rubric::{resolve_rubric, ScoringRubric};
pub use team::{
    derive_match_team_stats, first_blood_credit, MatchTeamStats, TeamAggregate, TeamIncrement,
    TeamTable,
};
