//! Setup shared by every command: rubric, match source, sink, and the
//! end-of-run summary.

use tracing::info;

use crate::{
    aggregate::{Aggregates, Aggregator},
    cli::CommonArgs,
    error::{FantasyError, Result},
    export::{CsvSink, JsonSink, TabularSink},
    opendota::{DirectoryMatchSource, MatchSource, OpenDotaClient},
    report::RunReport,
    scoring::{resolve_rubric, ScoringRubric},
    MatchId,
};

/// Resources a command needs, built from the shared CLI arguments.
pub struct CommandContext {
    pub match_ids: Vec<MatchId>,
    pub rubric: ScoringRubric,
    pub source: Box<dyn MatchSource>,
    pub sink: Box<dyn TabularSink>,
}

impl CommandContext {
    /// `default_team_scale` applies when `--team-scale` was not given.
    pub fn from_args(args: CommonArgs, default_team_scale: Option<f64>) -> Result<Self> {
        if args.matches.is_empty() {
            return Err(FantasyError::NoMatches);
        }

        let rubric = resolve_rubric(
            args.rubric.as_deref(),
            args.variant,
            args.team_scale.or(default_team_scale),
        )?;

        let source: Box<dyn MatchSource> = match (&args.from_dir, &args.base_url) {
            (Some(dir), _) => Box::new(DirectoryMatchSource::new(dir)),
            (None, Some(url)) => Box::new(OpenDotaClient::with_base_url(url.as_str())),
            (None, None) => Box::new(OpenDotaClient::new()),
        };

        let sink: Box<dyn TabularSink> = if args.json {
            Box::new(JsonSink::new(std::io::stdout()))
        } else {
            Box::new(CsvSink::new(&args.out_dir))
        };

        Ok(Self {
            match_ids: args.matches.0,
            rubric,
            source,
            sink,
        })
    }
}

/// Run the aggregator over `match_ids`, collecting issues into `report`.
pub async fn aggregate_matches(
    source: &dyn MatchSource,
    rubric: &ScoringRubric,
    match_ids: &[MatchId],
    report: &mut RunReport,
) -> Aggregates {
    info!(count = match_ids.len(), "processing matches");
    Aggregator::new(source, rubric).run(match_ids, report).await
}

/// Human-readable end-of-run summary.
pub fn summarize(aggregates: &Aggregates, report: &RunReport) -> String {
    let mut lines = vec![format!(
        "✓ {} match(es) processed: {} players, {} teams",
        aggregates.processed.len(),
        aggregates.players.len(),
        aggregates.teams.len()
    )];

    if report.is_clean() {
        lines.push("No issues.".to_string());
    } else {
        lines.push(format!("⚠ {} issue(s):", report.issues().len()));
        lines.extend(report.issues().iter().map(|issue| format!("  - {issue}")));
    }
    lines.join("\n")
}
