//! Tabular export of the final player, team, and participant tables.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::info;

use crate::{
    draft::ParticipantResult,
    error::Result,
    scoring::{PlayerTable, TeamTable},
};

pub const PLAYER_TABLE: &str = "player_stats";
pub const TEAM_TABLE: &str = "team_summary";
pub const PARTICIPANT_TABLE: &str = "participant_scores";

/// A named grid of already formatted cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

fn fmt_points(value: f64) -> String {
    format!("{value:.2}")
}

/// Columns: PlayerName, Kills, Deaths, Assists, KABonus, LastHits, Denies,
/// WardsPlaced, WinBonus, FantasyPoints.
pub fn player_table(players: &PlayerTable) -> Table {
    let mut table = Table::new(
        PLAYER_TABLE,
        &[
            "PlayerName",
            "Kills",
            "Deaths",
            "Assists",
            "KABonus",
            "LastHits",
            "Denies",
            "WardsPlaced",
            "WinBonus",
            "FantasyPoints",
        ],
    );
    for p in players.iter() {
        table.push_row(vec![
            p.name.clone(),
            p.kills.to_string(),
            p.deaths.to_string(),
            p.assists.to_string(),
            p.ka_bonus.to_string(),
            p.last_hits.to_string(),
            p.denies.to_string(),
            p.wards_placed.to_string(),
            p.win_bonus.to_string(),
            fmt_points(p.fantasy_points),
        ]);
    }
    table
}

pub fn team_table(teams: &TeamTable) -> Table {
    let mut table = Table::new(
        TEAM_TABLE,
        &[
            "Team",
            "Towers",
            "Barracks",
            "Roshans",
            "FirstBloods",
            "TotalFantasyPoints",
        ],
    );
    for t in teams.iter() {
        table.push_row(vec![
            t.team.clone(),
            t.towers.to_string(),
            t.barracks.to_string(),
            t.roshans.to_string(),
            t.first_bloods.to_string(),
            fmt_points(t.total_fantasy_points),
        ]);
    }
    table
}

/// One row per resolved pick; TotalScore repeats the participant's total.
pub fn participant_table(results: &[ParticipantResult]) -> Table {
    let mut table = Table::new(
        PARTICIPANT_TABLE,
        &["Participant", "Player", "Score", "TotalScore"],
    );
    for result in results {
        for pick in &result.picks {
            table.push_row(vec![
                result.participant.clone(),
                pick.player.clone(),
                fmt_points(pick.score),
                fmt_points(result.total_score),
            ]);
        }
    }
    table
}

/// Durable destination for finished tables.
pub trait TabularSink {
    fn write_table(&mut self, table: &Table) -> Result<()>;
}

/// Writes each table to `<dir>/<name>.csv`.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn path_for(&self, table: &Table) -> PathBuf {
        self.dir.join(format!("{}.csv", table.name))
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TabularSink for CsvSink {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(table);

        let mut wtr = csv::Writer::from_path(&path)?;
        wtr.write_record(&table.headers)?;
        for row in &table.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;

        info!(path = %path.display(), rows = table.rows.len(), "table written");
        self.written.push(path);
        Ok(())
    }
}

/// Writes each table as a pretty JSON object `{ "<name>": [ {header: cell} ] }`.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TabularSink for JsonSink<W> {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        let rows: Vec<Value> = table
            .rows
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = table
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned().map(Value::String))
                    .collect();
                Value::Object(obj)
            })
            .collect();

        let mut doc = Map::new();
        doc.insert(table.name.clone(), Value::Array(rows));
        writeln!(self.out, "{}", serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}
