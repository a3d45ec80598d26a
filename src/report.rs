//! Recoverable problems collected during a run.
//!
//! None of these stop the run; each one is logged when it happens and
//! listed again in the end-of-run report.

use thiserror::Error;

use crate::cli::types::MatchId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunIssue {
    /// The provider could not supply the match; its stats are left out.
    #[error("Error fetching data for match {match_id}: {}", fetch_detail(.status, .reason))]
    FetchFailed {
        match_id: MatchId,
        status: Option<u16>,
        reason: String,
    },
    /// The match ID appeared earlier in the input and was skipped.
    #[error("Match ID {match_id} has already been processed. Skipping...")]
    DuplicateMatch { match_id: MatchId },
    /// A drafted player never appeared in any processed match.
    #[error("{player} (picked by {participant}) is not in the original list.")]
    UnresolvedPick { participant: String, player: String },
    /// The same player was listed twice by one participant; the repeat was ignored.
    #[error("{participant} already picked {player}. Ignoring repeat.")]
    DuplicatePick { participant: String, player: String },
    /// A participant name was entered twice; the second entry was ignored.
    #[error("{participant} has already been entered. Please choose a different name.")]
    DuplicateParticipant { participant: String },
}

fn fetch_detail(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(status) => format!("{status} ({reason})"),
        None => reason.to_string(),
    }
}

/// Everything that went wrong but did not stop the run, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    issues: Vec<RunIssue>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: RunIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = RunIssue>) {
        self.issues.extend(issues);
    }

    pub fn issues(&self) -> &[RunIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn failed_matches(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.issues.iter().filter_map(|i| match i {
            RunIssue::FetchFailed { match_id, .. } => Some(*match_id),
            _ => None,
        })
    }

    pub fn duplicate_matches(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.issues.iter().filter_map(|i| match i {
            RunIssue::DuplicateMatch { match_id } => Some(*match_id),
            _ => None,
        })
    }
}
