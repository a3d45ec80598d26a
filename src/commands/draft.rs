//! Draft scoring: player table, participant table, and team table.

use std::{io::Write, path::PathBuf};

use tracing::info;

use crate::{
    aggregate::Aggregates,
    cli::CommonArgs,
    draft::{resolve, InteractiveSelections, JsonSelections, ParticipantResult, SelectionProvider},
    export::{participant_table, player_table, team_table, TabularSink},
    opendota::MatchSource,
    report::RunReport,
    scoring::ScoringRubric,
    MatchId, Result,
};

use super::common::{aggregate_matches, summarize, CommandContext};

/// Everything the draft command produces.
#[derive(Debug)]
pub struct DraftOutcome {
    pub aggregates: Aggregates,
    pub results: Vec<ParticipantResult>,
    pub report: RunReport,
}

/// Aggregate `match_ids`, collect selections once the player list is known,
/// resolve them, and write all three tables to `sink`.
pub async fn run_draft(
    source: &dyn MatchSource,
    rubric: &ScoringRubric,
    match_ids: &[MatchId],
    provider: &mut dyn SelectionProvider,
    sink: &mut dyn TabularSink,
) -> Result<DraftOutcome> {
    let mut report = RunReport::new();
    let aggregates = aggregate_matches(source, rubric, match_ids, &mut report).await;

    let (book, selection_issues) = provider.collect(&aggregates.players.names())?;
    report.extend(selection_issues);

    let (results, resolve_issues) = resolve(&book, &aggregates.players);
    report.extend(resolve_issues);
    info!(participants = results.len(), "draft resolved");

    sink.write_table(&player_table(&aggregates.players))?;
    sink.write_table(&participant_table(&results))?;
    sink.write_table(&team_table(&aggregates.teams))?;

    Ok(DraftOutcome {
        aggregates,
        results,
        report,
    })
}

/// Stream that carries interactive prompts. JSON output owns stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptStream {
    Stdout,
    Stderr,
}

impl PromptStream {
    fn for_output(json: bool) -> Self {
        if json {
            PromptStream::Stderr
        } else {
            PromptStream::Stdout
        }
    }

    fn writer(self) -> Box<dyn Write> {
        match self {
            PromptStream::Stdout => Box::new(std::io::stdout()),
            PromptStream::Stderr => Box::new(std::io::stderr()),
        }
    }
}

/// Handle the draft command
pub async fn handle_draft(
    args: CommonArgs,
    selections: Option<PathBuf>,
    interactive: bool,
) -> Result<()> {
    let json = args.json;
    let mut ctx = CommandContext::from_args(args, None)?;

    let mut provider: Box<dyn SelectionProvider> = match selections {
        Some(path) if !interactive => Box::new(JsonSelections::new(path)),
        _ => Box::new(InteractiveSelections::new(
            std::io::stdin().lock(),
            PromptStream::for_output(json).writer(),
        )),
    };

    let outcome = run_draft(
        ctx.source.as_ref(),
        &ctx.rubric,
        &ctx.match_ids,
        provider.as_mut(),
        ctx.sink.as_mut(),
    )
    .await?;

    if !json {
        for result in &outcome.results {
            println!("{}: {:.2}", result.participant, result.total_score);
        }
        println!("{}", summarize(&outcome.aggregates, &outcome.report));
    }
    Ok(())
}
