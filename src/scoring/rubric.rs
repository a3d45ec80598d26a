//! Point weights for player and team scoring.
//!
//! Every weight lives in [`ScoringRubric`]; nothing in the scoring engines is
//! hard-coded. A rubric can be loaded from JSON, and any field left out of the
//! file keeps its default value.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    cli::types::RubricVariant,
    core::{default_rubric_path, try_read_to_string},
    error::{FantasyError, Result},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRubric {
    pub kill: f64,
    pub assist: f64,
    pub death: f64,
    pub last_hit: f64,
    pub deny: f64,
    /// Per observer or sentry ward placed.
    pub ward: f64,
    /// Awarded when kills + assists is strictly greater than `ka_threshold`.
    pub ka_bonus: f64,
    pub ka_threshold: u32,
    /// Awarded on every win.
    pub win_bonus: f64,
    /// Awarded on a win when the match lasted fewer than `early_win_max_minutes`.
    pub early_win_bonus: f64,
    pub early_win_max_minutes: u32,

    pub tower: f64,
    pub barracks: f64,
    pub roshan: f64,
    pub first_blood: f64,
    /// Multiplier on each team's derived total.
    pub team_total_scale: f64,
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::preset(RubricVariant::default())
    }
}

impl ScoringRubric {
    pub fn preset(variant: RubricVariant) -> Self {
        let win_bonus = match variant {
            RubricVariant::EarlyWinOnly => 0.0,
            RubricVariant::WinPlusEarlyWin => 15.0,
        };

        Self {
            kill: 3.0,
            assist: 2.0,
            death: -1.0,
            last_hit: 0.02,
            deny: 0.02,
            ward: 0.2,
            ka_bonus: 2.0,
            ka_threshold: 20,
            win_bonus,
            early_win_bonus: 15.0,
            early_win_max_minutes: 25,
            tower: 1.0,
            barracks: 1.0,
            roshan: 3.0,
            first_blood: 2.0,
            team_total_scale: 1.0,
        }
    }

    pub fn with_team_scale(mut self, scale: f64) -> Self {
        self.team_total_scale = scale;
        self
    }

    /// Reject weights that would poison every total (NaN, infinities, negative scale).
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("kill", self.kill),
            ("assist", self.assist),
            ("death", self.death),
            ("last_hit", self.last_hit),
            ("deny", self.deny),
            ("ward", self.ward),
            ("ka_bonus", self.ka_bonus),
            ("win_bonus", self.win_bonus),
            ("early_win_bonus", self.early_win_bonus),
            ("tower", self.tower),
            ("barracks", self.barracks),
            ("roshan", self.roshan),
            ("first_blood", self.first_blood),
            ("team_total_scale", self.team_total_scale),
        ];

        if let Some((name, _)) = weights.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FantasyError::InvalidRubric {
                message: format!("{name} must be a finite number"),
            });
        }
        if self.team_total_scale < 0.0 {
            return Err(FantasyError::InvalidRubric {
                message: "team_total_scale must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a rubric file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let rubric: ScoringRubric = serde_json::from_str(&contents)?;
        rubric.validate()?;
        Ok(rubric)
    }
}

/// Pick the rubric for a run.
///
/// An explicit file must exist. Otherwise the per-user config file is used if
/// present, falling back to the preset for `variant`. `team_scale` overrides
/// whatever was loaded.
pub fn resolve_rubric(
    explicit: Option<&Path>,
    variant: RubricVariant,
    team_scale: Option<f64>,
) -> Result<ScoringRubric> {
    resolve_rubric_from(explicit, default_rubric_path(), variant, team_scale)
}

pub(crate) fn resolve_rubric_from(
    explicit: Option<&Path>,
    user_config: Option<PathBuf>,
    variant: RubricVariant,
    team_scale: Option<f64>,
) -> Result<ScoringRubric> {
    let rubric = if let Some(path) = explicit {
        info!(path = %path.display(), "loading scoring rubric");
        ScoringRubric::load(path)?
    } else if let Some(s) = user_config.as_deref().and_then(try_read_to_string) {
        debug!("using rubric from user config");
        let rubric: ScoringRubric = serde_json::from_str(&s)?;
        rubric.validate()?;
        rubric
    } else {
        debug!(%variant, "using preset rubric");
        ScoringRubric::preset(variant)
    };

    let rubric = match team_scale {
        Some(scale) => rubric.with_team_scale(scale),
        None => rubric,
    };
    rubric.validate()?;
    Ok(rubric)
}
