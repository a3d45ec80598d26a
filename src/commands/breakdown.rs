//! Full point breakdown: player table plus team table.

use crate::{
    aggregate::Aggregates,
    cli::CommonArgs,
    export::{player_table, team_table, TabularSink},
    opendota::MatchSource,
    report::RunReport,
    scoring::ScoringRubric,
    MatchId, Result,
};

use super::common::{aggregate_matches, summarize, CommandContext};

/// Aggregate `match_ids` and write the player and team tables to `sink`.
pub async fn run_breakdown(
    source: &dyn MatchSource,
    rubric: &ScoringRubric,
    match_ids: &[MatchId],
    sink: &mut dyn TabularSink,
) -> Result<(Aggregates, RunReport)> {
    let mut report = RunReport::new();
    let aggregates = aggregate_matches(source, rubric, match_ids, &mut report).await;

    sink.write_table(&player_table(&aggregates.players))?;
    sink.write_table(&team_table(&aggregates.teams))?;

    Ok((aggregates, report))
}

/// Handle the breakdown command
pub async fn handle_breakdown(args: CommonArgs) -> Result<()> {
    let json = args.json;
    let mut ctx = CommandContext::from_args(args, None)?;

    let (aggregates, report) = run_breakdown(
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
