//! Team-only summary.

use crate::{
    aggregate::Aggregates,
    cli::CommonArgs,
    export::{team_table, TabularSink},
    opendota::MatchSource,
    report::RunReport,
    scoring::ScoringRubric,
    MatchId, Result,
};

use super::common::{aggregate_matches, summarize, CommandContext};

/// Team totals are halved in this report unless a scale is given.
pub const TEAMS_DEFAULT_SCALE: f64 = 0.5;

/// Aggregate `match_ids` and write only the team table to `sink`.
pub async fn run_teams(
    source: &dyn MatchSource,
    rubric: &ScoringRubric,
    match_ids: &[MatchId],
    sink: &mut dyn TabularSink,
) -> Result<(Aggregates, RunReport)> {
    let mut report = RunReport::new();
    let aggregates = aggregate_matches(source, rubric, match_ids, &mut report).await;

    sink.write_table(&team_table(&aggregates.teams))?;

    Ok((aggregates, report))
}

/// Handle the teams command
pub async fn handle_teams(args: CommonArgs) -> Result<()> {
    let json = args.json;
    let mut ctx = CommandContext::from_args(args, Some(TEAMS_DEFAULT_SCALE))?;

    let (aggregates, report) = run_teams(
        ctx.source.as_ref(),
        &ctx.rubric,
        &ctx.match_ids,
        ctx.sink.as_mut(),
    )
    .await?;

    if !json {
        println!("{}", summarize(&aggregates, &report));
    }
    Ok(())
}
