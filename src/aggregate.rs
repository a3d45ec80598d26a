//! Fetch → score → accumulate over a list of match IDs.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::{
    cli::types::MatchId,
    opendota::source::MatchSource,
    report::{RunIssue, RunReport},
    scoring::{PlayerTable, ScoringRubric, TeamTable},
};

/// Tables built from one run.
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub players: PlayerTable,
    pub teams: TeamTable,
    /// Match IDs that were fetched and folded in, in input order.
    pub processed: Vec<MatchId>,
}

/// Processes matches one at a time, in input order.
pub struct Aggregator<'a, S: MatchSource + ?Sized> {
    source: &'a S,
    rubric: &'a ScoringRubric,
}

impl<'a, S: MatchSource + ?Sized> Aggregator<'a, S> {
    pub fn new(source: &'a S, rubric: &'a ScoringRubric) -> Self {
        Self { source, rubric }
    }

    /// Build player and team tables for `match_ids`.
    ///
    /// Each ID is attempted at most once; repeats and failed fetches are
    /// recorded in `report` and skipped.
    pub async fn run(&self, match_ids: &[MatchId], report: &mut RunReport) -> Aggregates {
        let mut out = Aggregates::default();
        let mut seen: HashSet<MatchId> = HashSet::new();

        for &match_id in match_ids {
            if !seen.insert(match_id) {
                warn!(%match_id, "match already processed, skipping");
                report.push(RunIssue::DuplicateMatch { match_id });
                continue;
            }

            let record = match self.source.fetch_match(match_id).await {
                Ok(record) => record,
                Err(e) => {
                    warn!(%match_id, error = %e, "fetch failed, skipping match");
                    report.push(RunIssue::FetchFailed {
                        match_id,
                        status: e.status(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            out.players.record_match(&record, self.rubric);
            let team_stats = out.teams.record_match(&record, self.rubric);
            out.processed.push(match_id);

            info!(
                %match_id,
                radiant = %team_stats.radiant.team,
                dire = %team_stats.dire.team,
                first_blood = %team_stats.first_blood_label(),
                players = record.players.len(),
                "match processed"
            );
        }

        out
    }
}
