use indexmap::IndexMap;

use crate::{
    opendota::types::{MatchRecord, Side},
    scoring::{player::round2, rubric::ScoringRubric},
};


/// Towers per side on a full map.
pub const TOWER_COUNT: u32 = 11;
/// Barracks per side on a full map.
pub const BARRACKS_COUNT: u32 = 6;

/// Label used when nobody scored a kill.
pub const NO_FIRST_BLOOD: &str = "No First Blood";

/// Structures lost by the side whose status bitmask this is.
pub fn structures_lost(total: u32, status: u32) -> u32 {
    total.saturating_sub(status.count_ones())
}

/// The side credited with first blood, if any.
///
/// Credit goes to the side opposite the one with a killer on it, with Radiant
/// checked first. This mirrors the lost-structures swap in
/// [`derive_match_team_stats`].
pub fn first_blood_credit(record: &MatchRecord) -> Option<Side> {
    [Side::Radiant, Side::Dire]
        .into_iter()
        .find(|&side| record.players_on(side).any(|p| p.kills > 0))
        .map(Side::opponent)
}

/// One team's contribution from a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamIncrement {
    pub team: String,
    pub towers: u32,
    pub barracks: u32,
    pub roshans: u32,
    pub first_blood: bool,
}

/// Both teams' contributions from a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTeamStats {
    pub radiant: TeamIncrement,
    pub dire: TeamIncrement,
    pub first_blood: Option<Side>,
}

impl MatchTeamStats {
    pub fn side(&self, side: Side) -> &TeamIncrement {
        match side {
            Side::Radiant => &self.radiant,
            Side::Dire => &self.dire,
        }
    }

    /// Team name credited with first blood, or [`NO_FIRST_BLOOD`].
    pub fn first_blood_label(&self) -> &str {
        match self.first_blood {
            Some(side) => &self.side(side).team,
            None => NO_FIRST_BLOOD,
        }
    }
}

/// Per-team increments for one match.
///
/// A side's status bitmask counts its own standing structures, so what it
/// lost is credited to the opponent's destroyed count.
pub fn derive_match_team_stats(record: &MatchRecord) -> MatchTeamStats {
    let radiant_towers_lost = structures_lost(TOWER_COUNT, record.tower_status_radiant);
    let dire_towers_lost = structures_lost(TOWER_COUNT, record.tower_status_dire);
    let radiant_barracks_lost = structures_lost(BARRACKS_COUNT, record.barracks_status_radiant);
    let dire_barracks_lost = structures_lost(BARRACKS_COUNT, record.barracks_status_dire);

    let roshans = |side: Side| -> u32 {
        record
            .players_on(side)
            .fold(0, |acc, p| acc.saturating_add(p.roshans_killed))
    };
    let first_blood = first_blood_credit(record);

    MatchTeamStats {
        radiant: TeamIncrement {
            team: record.team_name(Side::Radiant).to_string(),
            towers: dire_towers_lost,
            barracks: dire_barracks_lost,
            roshans: roshans(Side::Radiant),
            first_blood: first_blood == Some(Side::Radiant),
        },
        dire: TeamIncrement {
            team: record.team_name(Side::Dire).to_string(),
            towers: radiant_towers_lost,
            barracks: radiant_barracks_lost,
            roshans: roshans(Side::Dire),
            first_blood: first_blood == Some(Side::Dire),
        },
        first_blood,
    }
}

/// Running totals for one team across every processed match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamAggregate {
    pub team: String,
    pub towers: u32,
    pub barracks: u32,
    pub roshans: u32,
    pub first_bloods: u32,
    pub total_fantasy_points: f64,
}

impl TeamAggregate {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Default::default()
        }
    }

    pub fn accumulate(&mut self, inc: &TeamIncrement, rubric: &ScoringRubric) {
        self.towers = self.towers.saturating_add(inc.towers);
        self.barracks = self.barracks.saturating_add(inc.barracks);
        self.roshans = self.roshans.saturating_add(inc.roshans);
        if inc.first_blood {
            self.first_bloods += 1;
        }
        self.total_fantasy_points = self.derived_total(rubric);
    }

    /// towers + barracks + 3×roshans + 2×first bloods, times the team scale
    /// (weights per the rubric).
    pub fn derived_total(&self, rubric: &ScoringRubric) -> f64 {
        let raw = f64::from(self.towers) * rubric.tower
            + f64::from(self.barracks) * rubric.barracks
            + f64::from(self.roshans) * rubric.roshan
            + f64::from(self.first_bloods) * rubric.first_blood;
        round2(raw * rubric.team_total_scale)
    }
}

/// Every team seen so far, in first-sighting order (Radiant before Dire).
#[derive(Debug, Clone, Default)]
pub struct TeamTable {
    rows: IndexMap<String, TeamAggregate>,
}

impl TeamTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_match(&mut self, record: &MatchRecord, rubric: &ScoringRubric) -> MatchTeamStats {
        let stats = derive_match_team_stats(record);
        for inc in [&stats.radiant, &stats.dire] {
            self.rows
                .entry(inc.team.clone())
                .or_insert_with(|| TeamAggregate::new(inc.team.clone()))
                .accumulate(inc, rubric);
        }
        stats
    }

    pub fn get(&self, team: &str) -> Option<&TeamAggregate> {
        self.rows.get(team)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamAggregate> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
