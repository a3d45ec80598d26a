use indexmap::IndexMap;

use crate::{
    opendota::types::{MatchRecord, PlayerMatchEntry},
    scoring::rubric::ScoringRubric,
};


/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One player's score for one match, with the bonuses that fed into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    pub points: f64,
    pub ka_bonus: bool,
    pub win_bonus: bool,
    pub early_win_bonus: bool,
}

/// Score one player's line. Bonuses are independent of each other.
pub fn compute_match_score(
    entry: &PlayerMatchEntry,
    duration_minutes: u32,
    rubric: &ScoringRubric,
) -> MatchScore {
    let base = f64::from(entry.kills) * rubric.kill
        + f64::from(entry.assists) * rubric.assist
        + f64::from(entry.deaths) * rubric.death
        + f64::from(entry.last_hits) * rubric.last_hit
        + f64::from(entry.denies) * rubric.deny
        + f64::from(entry.wards_placed()) * rubric.ward;

    let ka_bonus = entry.kills.saturating_add(entry.assists) > rubric.ka_threshold;
    let win_bonus = entry.won() && rubric.win_bonus != 0.0;
    let early_win_bonus = entry.won() && duration_minutes < rubric.early_win_max_minutes;

    let mut points = base;
    if ka_bonus {
        points += rubric.ka_bonus;
    }
    if win_bonus {
        points += rubric.win_bonus;
    }
    if early_win_bonus {
        points += rubric.early_win_bonus;
    }

    MatchScore {
        points: round2(points),
        ka_bonus,
        win_bonus,
        early_win_bonus,
    }
}

/// Fantasy points for one player's line, rounded to 2 decimal places.
pub fn score(entry: &PlayerMatchEntry, duration_minutes: u32, rubric: &ScoringRubric) -> f64 {
    compute_match_score(entry, duration_minutes, rubric).points
}

/// Running totals for one player across every processed match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerAggregate {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Matches in which the K/A bonus was earned.
    pub ka_bonus: u32,
    pub last_hits: u32,
    pub denies: u32,
    pub wards_placed: u32,
    /// Matches in which a win-related bonus was earned.
    pub win_bonus: u32,
    pub fantasy_points: f64,
}

impl PlayerAggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn accumulate(
        &mut self,
        entry: &PlayerMatchEntry,
        duration_minutes: u32,
        rubric: &ScoringRubric,
    ) {
        let scored = compute_match_score(entry, duration_minutes, rubric);

        // Provider counts are untrusted; saturate rather than overflow.
        self.kills = self.kills.saturating_add(entry.kills);
        self.deaths = self.deaths.saturating_add(entry.deaths);
        self.assists = self.assists.saturating_add(entry.assists);
        self.last_hits = self.last_hits.saturating_add(entry.last_hits);
        self.denies = self.denies.saturating_add(entry.denies);
        self.wards_placed = self.wards_placed.saturating_add(entry.wards_placed());
        if scored.ka_bonus {
            self.ka_bonus += 1;
        }
        if scored.win_bonus || scored.early_win_bonus {
            self.win_bonus += 1;
        }
        // Sum of 2dp values; re-round to shed float noise.
        self.fantasy_points = round2(self.fantasy_points + scored.points);
    }
}

/// Every player seen so far, in first-sighting order.
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    rows: IndexMap<String, PlayerAggregate>,
}

impl PlayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold all player lines of one match into the table.
    pub fn record_match(&mut self, record: &MatchRecord, rubric: &ScoringRubric) {
        let minutes = record.duration_minutes();
        for entry in &record.players {
            let name = entry.display_name();
            self.rows
                .entry(name.to_string())
                .or_insert_with(|| PlayerAggregate::new(name))
                .accumulate(entry, minutes, rubric);
        }
    }

    pub fn get(&self, name: &str) -> Option<&PlayerAggregate> {
        self.rows.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerAggregate> {
        self.rows.values()
    }

    pub fn names(&self) -> Vec<String> {
        self.rows.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
