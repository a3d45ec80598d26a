//! Dota 2 Fantasy League Library
//!
//! Turns historical match records into fantasy points for players and teams,
//! and scores league participants by the players they drafted.
//!
//! ## Features
//!
//! - **Match Retrieval**: Fetch match records from the OpenDota API, or replay saved payloads
//! - **Player Scoring**: Configurable per-stat weights plus K/A, win and early-win bonuses
//! - **Team Stats**: Towers, barracks, Roshans and first blood derived per match
//! - **Aggregation**: Deterministic running totals across any set of matches, repeats skipped
//! - **Draft Resolution**: Participant totals with a 1.5x first-pick multiplier
//! - **Export**: CSV tables, or JSON on stdout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dota_fantasy::{aggregate::Aggregator, report::RunReport, MatchId, OpenDotaClient, ScoringRubric};
//!
//! # async fn example() {
//! let client = OpenDotaClient::new();
//! let rubric = ScoringRubric::default();
//! let mut report = RunReport::new();
//!
//! let ids = [MatchId::new(7450123456), MatchId::new(7450198765)];
//! let tables = Aggregator::new(&client, &rubric).run(&ids, &mut report).await;
//!
//! for player in tables.players.iter() {
//!     println!("{}: {:.2}", player.name, player.fantasy_points);
//! }
//! # }
//! ```

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod core;
pub mod draft;
pub mod error;
pub mod export;
pub mod opendota;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use cli::types::{MatchId, MatchIdList, RubricVariant};
pub use error::{FantasyError, Result};
pub use opendota::{MatchRecord, MatchSource, OpenDotaClient, PlayerMatchEntry};
pub use scoring::{PlayerAggregate, ScoringRubric, TeamAggregate};
