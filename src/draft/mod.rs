//! Draft resolution: participants, their ordered picks, and their scores.
//!
//! - `providers`: where selections come from (JSON file or an interactive prompt)

pub mod providers;

use serde::Deserialize;
use tracing::warn;

use crate::{report::RunIssue, scoring::PlayerTable};

pub use providers::{InteractiveSelections, JsonSelections, SelectionProvider};

/// Multiplier on a participant's first pick.
pub const FIRST_PICK_MULTIPLIER: f64 = 1.5;

/// One participant's picks, in draft order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParticipantSelection {
    pub participant: String,
    pub players: Vec<String>,
}

/// All participants, in entry order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionBook {
    selections: Vec<ParticipantSelection>,
}

impl SelectionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, participant: &str) -> bool {
        self.selections.iter().any(|s| s.participant == participant)
    }

    /// Add a participant. A name already in the book is rejected and the
    /// first entry kept.
    pub fn add(&mut self, participant: &str, players: Vec<String>) -> Result<(), RunIssue> {
        let participant = participant.trim();
        if self.contains(participant) {
            warn!(participant, "duplicate participant ignored");
            return Err(RunIssue::DuplicateParticipant {
                participant: participant.to_string(),
            });
        }
        self.selections.push(ParticipantSelection {
            participant: participant.to_string(),
            players,
        });
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantSelection> {
        self.selections.iter()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// One resolved pick.
#[derive(Debug, Clone, PartialEq)]
pub struct PickScore {
    pub player: String,
    pub score: f64,
}

/// A participant's resolved picks and total.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantResult {
    pub participant: String,
    pub picks: Vec<PickScore>,
    pub total_score: f64,
}

/// Score every participant's picks against the player table.
///
/// The pick at position 0 is worth [`FIRST_PICK_MULTIPLIER`] times the
/// player's fantasy points; the rest count once. Names missing from the table
/// and repeated names are reported and skipped, without affecting other picks.
pub fn resolve(
    book: &SelectionBook,
    players: &PlayerTable,
) -> (Vec<ParticipantResult>, Vec<RunIssue>) {
    let mut results = Vec::with_capacity(book.len());
    let mut issues = Vec::new();

    for selection in book.iter() {
        let mut picks: Vec<PickScore> = Vec::new();

        for (i, name) in selection.players.iter().enumerate() {
            if selection.players[..i].contains(name) {
                warn!(participant = %selection.participant, player = %name, "repeated pick ignored");
                issues.push(RunIssue::DuplicatePick {
                    participant: selection.participant.clone(),
                    player: name.clone(),
                });
                continue;
            }

            let Some(agg) = players.get(name) else {
                warn!(
                    participant = %selection.participant,
                    player = %name,
                    "pick not found in player table"
                );
                issues.push(RunIssue::UnresolvedPick {
                    participant: selection.participant.clone(),
                    player: name.clone(),
                });
                continue;
            };

            let multiplier = if i == 0 { FIRST_PICK_MULTIPLIER } else { 1.0 };
            picks.push(PickScore {
                player: name.clone(),
                score: agg.fantasy_points * multiplier,
            });
        }

        let total_score = picks.iter().map(|p| p.score).sum();
        results.push(ParticipantResult {
            participant: selection.participant.clone(),
            picks,
            total_score,
        });
    }

    (results, issues)
}
