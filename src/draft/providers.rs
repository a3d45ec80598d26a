//! Sources of participant selections.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::info;

use crate::{
    draft::{ParticipantSelection, SelectionBook},
    error::Result,
    report::RunIssue,
};

/// Word that ends interactive entry (case-insensitive).
pub const DONE_TOKEN: &str = "done";

/// Produces the participant → picks book before resolution runs.
pub trait SelectionProvider {
    /// `available` is the list of player names the picks can refer to.
    fn collect(&mut self, available: &[String]) -> Result<(SelectionBook, Vec<RunIssue>)>;
}

/// Split `"a, b ,c"` into trimmed, non-empty names.
pub fn parse_pick_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Selections from a JSON file:
/// `[{"participant": "Alex", "players": ["Yatoro", "Collapse"]}]`.
#[derive(Debug, Clone)]
pub struct JsonSelections {
    path: PathBuf,
}

impl JsonSelections {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SelectionProvider for JsonSelections {
    fn collect(&mut self, _available: &[String]) -> Result<(SelectionBook, Vec<RunIssue>)> {
        let contents = std::fs::read_to_string(&self.path)?;
        let entries: Vec<ParticipantSelection> = serde_json::from_str(&contents)?;

        let mut book = SelectionBook::new();
        let mut issues = Vec::new();
        for entry in entries {
            let players = entry
                .players
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            if let Err(issue) = book.add(&entry.participant, players) {
                issues.push(issue);
            }
        }

        info!(path = %self.path.display(), participants = book.len(), "selections loaded");
        Ok((book, issues))
    }
}

/// Prompts for participant names and their picks until `done` or end of input.
pub struct InteractiveSelections<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSelections<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> SelectionProvider for InteractiveSelections<R, W> {
    fn collect(&mut self, available: &[String]) -> Result<(SelectionBook, Vec<RunIssue>)> {
        writeln!(self.output, "Player Names: {}", available.join(", "))?;

        let mut book = SelectionBook::new();
        let mut issues = Vec::new();

        loop {
            let Some(name) = self.prompt("Enter a participant's name (or type 'done' to finish): ")?
            else {
                break;
            };
            if name.eq_ignore_ascii_case(DONE_TOKEN) {
                break;
            }
            if name.is_empty() {
                continue;
            }
            if book.contains(&name) {
                let issue = RunIssue::DuplicateParticipant { participant: name };
                writeln!(self.output, "{issue}")?;
                issues.push(issue);
                continue;
            }

            let picks = self
                .prompt(&format!(
                    "Select players for {name} from the list above separated by commas: "
                ))?
                .map(|line| parse_pick_list(&line))
                .unwrap_or_default();

            for pick in picks.iter().filter(|p| !available.contains(*p)) {
                writeln!(self.output, "{pick} is not in the original list.")?;
            }

            if let Err(issue) = book.add(&name, picks) {
                issues.push(issue);
            }
        }

        Ok((book, issues))
    }
}
