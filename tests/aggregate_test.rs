//! Integration tests for multi-match aggregation

mod common;

use common::{liquid_vs_spirit, spirit_vs_liquid, MemorySource};
use dota_fantasy::{
    aggregate::Aggregator,
    report::{RunIssue, RunReport},
    MatchId, RubricVariant, ScoringRubric,
};

fn ids(raw: &[u64]) -> Vec<MatchId> {
    raw.iter().copied().map(MatchId::new).collect()
}

#[tokio::test]
async fn test_player_totals_across_two_matches() {
    let source = MemorySource::default()
        .with(spirit_vs_liquid(100))
        .with(liquid_vs_spirit(200));
    let rubric = ScoringRubric::default();
    let mut report = RunReport::new();

    let tables = Aggregator::new(&source, &rubric)
        .run(&ids(&[100, 200]), &mut report)
        .await;

    assert!(report.is_clean());
    assert_eq!(tables.processed, ids(&[100, 200]));
    assert_eq!(tables.players.len(), 10);

    let yatoro = tables.players.get("Yatoro").unwrap();
    assert_eq!(yatoro.kills, 17);
    assert_eq!(yatoro.deaths, 6);
    assert_eq!(yatoro.assists, 10);
    assert_eq!(yatoro.last_hits, 200);
    assert_eq!(yatoro.denies, 10);
    assert_eq!(yatoro.wards_placed, 4);
    assert_eq!(yatoro.ka_bonus, 0);
    assert_eq!(yatoro.win_bonus, 1);
    // 68.5 (early win) + 16.5
    assert_eq!(yatoro.fantasy_points, 85.0);

    let micke = tables.players.get("miCKe").unwrap();
    assert_eq!(micke.fantasy_points, 47.0);
    assert_eq!(micke.win_bonus, 0);

    let order: Vec<_> = tables.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(&order[..2], &["Yatoro", "Larl"]);
    assert_eq!(order[5], "miCKe");
}

#[tokio::test]
async fn test_team_totals_with_perspective_swap() {
    let source = MemorySource::default()
        .with(spirit_vs_liquid(100))
        .with(liquid_vs_spirit(200));
    let rubric = ScoringRubric::default();
    let mut report = RunReport::new();

    let tables = Aggregator::new(&source, &rubric)
        .run(&ids(&[100, 200]), &mut report)
        .await;

    let names: Vec<_> = tables.teams.iter().map(|t| t.team.as_str()).collect();
    assert_eq!(names, vec!["Team Spirit", "Team Liquid"]);

    let spirit = tables.teams.get("Team Spirit").unwrap();
    assert_eq!(spirit.towers, 13);
    assert_eq!(spirit.barracks, 6);
    assert_eq!(spirit.roshans, 5);
    assert_eq!(spirit.first_bloods, 1);
    assert_eq!(spirit.total_fantasy_points, 36.0);

    let liquid = tables.teams.get("Team Liquid").unwrap();
    assert_eq!(liquid.towers, 11);
    assert_eq!(liquid.barracks, 4);
    assert_eq!(liquid.roshans, 5);
    assert_eq!(liquid.first_bloods, 1);
    assert_eq!(liquid.total_fantasy_points, 32.0);
}

#[tokio::test]
async fn test_repeated_match_id_is_processed_once() {
    let source = MemorySource::default().with(spirit_vs_liquid(123));
    let rubric = ScoringRubric::default();

    let mut once_report = RunReport::new();
    let once = Aggregator::new(&source, &rubric)
        .run(&ids(&[123]), &mut once_report)
        .await;

    let mut twice_report = RunReport::new();
    let twice = Aggregator::new(&source, &rubric)
        .run(&ids(&[123, 123]), &mut twice_report)
        .await;

    assert_eq!(
        twice_report.issues(),
        &[RunIssue::DuplicateMatch {
            match_id: MatchId::new(123)
        }]
    );
    assert_eq!(twice.processed, ids(&[123]));

    let a: Vec<_> = once.players.iter().cloned().collect();
    let b: Vec<_> = twice.players.iter().cloned().collect();
    assert_eq!(a, b);
    let a: Vec<_> = once.teams.iter().cloned().collect();
    let b: Vec<_> = twice.teams.iter().cloned().collect();
    assert_eq!(a, b);

    // One fetch for the single run, one for the deduplicated run.
    assert_eq!(source.calls(), ids(&[123, 123]));
}

#[tokio::test]
async fn test_failed_fetch_is_skipped_and_reported() {
    let source = MemorySource::default().with(spirit_vs_liquid(1));
    let rubric = ScoringRubric::default();
    let mut report = RunReport::new();

    let tables = Aggregator::new(&source, &rubric)
        .run(&ids(&[404, 1, 404]), &mut report)
        .await;

    assert_eq!(tables.processed, ids(&[1]));
    assert_eq!(tables.players.len(), 10);
    assert_eq!(report.failed_matches().collect::<Vec<_>>(), ids(&[404]));
    assert_eq!(report.duplicate_matches().collect::<Vec<_>>(), ids(&[404]));
    match &report.issues()[0] {
        RunIssue::FetchFailed { status, .. } => assert_eq!(*status, Some(404)),
        other => panic!("Expected FetchFailed, got {other:?}"),
    }
    // A failed ID is not retried.
    assert_eq!(source.calls(), ids(&[404, 1]));
}

#[tokio::test]
async fn test_rerun_is_reproducible() {
    let source = MemorySource::default()
        .with(spirit_vs_liquid(100))
        .with(liquid_vs_spirit(200));
    let rubric = ScoringRubric::preset(RubricVariant::WinPlusEarlyWin);

    let mut r1 = RunReport::new();
    let first = Aggregator::new(&source, &rubric)
        .run(&ids(&[200, 100]), &mut r1)
        .await;
    let mut r2 = RunReport::new();
    let second = Aggregator::new(&source, &rubric)
        .run(&ids(&[200, 100]), &mut r2)
        .await;

    let a: Vec<_> = first.players.iter().cloned().collect();
    let b: Vec<_> = second.players.iter().cloned().collect();
    assert_eq!(a, b);
    // Liquid's win in match 200 is not early but still earns the win bonus here.
    assert_eq!(first.players.get("miCKe").unwrap().win_bonus, 1);
    assert_eq!(first.players.get("miCKe").unwrap().fantasy_points, 62.0);
}

#[tokio::test]
async fn test_no_matches_yields_empty_tables() {
    let source = MemorySource::default();
    let rubric = ScoringRubric::default();
    let mut report = RunReport::new();

    let tables = Aggregator::new(&source, &rubric).run(&[], &mut report).await;
    assert!(tables.players.is_empty());
    assert!(tables.teams.is_empty());
    assert!(report.is_clean());
}
