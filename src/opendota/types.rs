use crate::cli::types::MatchId;
use serde::{Deserialize, Deserializer};


/// Identity used when a player has neither a pro name nor a display name.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// Slot indices at or above this value belong to the Dire side.
pub const DIRE_SLOT_THRESHOLD: u8 = 128;

/// Treat `null` the same as an absent field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn de_team_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct TeamInfo {
        #[serde(default)]
        name: Option<String>,
    }

    let team: Option<TeamInfo> = Deserialize::deserialize(deserializer)?;
    Ok(team
        .and_then(|t| t.name)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty()))
}

fn usable_name(name: &Option<String>) -> Option<&str> {
    name.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != UNKNOWN_PLAYER)
}

/// Which half of the map a slot plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Radiant,
    Dire,
}

impl Side {
    pub fn from_slot(slot: u8) -> Self {
        if slot < DIRE_SLOT_THRESHOLD {
            Side::Radiant
        } else {
            Side::Dire
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Radiant => Side::Dire,
            Side::Dire => Side::Radiant,
        }
    }
}

/// One match as returned by the `/matches/{id}` endpoint.
///
/// Only the fields the scoring rubric reads are kept. Numeric fields that
/// are missing or `null` in the payload are zero after deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRecord {
    pub match_id: MatchId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub duration: u32,
    #[serde(rename = "radiant_team", default, deserialize_with = "de_team_name")]
    pub radiant_name: Option<String>,
    #[serde(rename = "dire_team", default, deserialize_with = "de_team_name")]
    pub dire_name: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub tower_status_radiant: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub tower_status_dire: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub barracks_status_radiant: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub barracks_status_dire: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<PlayerMatchEntry>,
}

impl MatchRecord {
    /// Match length in whole minutes (truncating).
    pub fn duration_minutes(&self) -> u32 {
        self.duration / 60
    }

    /// Team name for a side, falling back to the side name for unlisted teams.
    pub fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Radiant => self.radiant_name.as_deref().unwrap_or("Radiant"),
            Side::Dire => self.dire_name.as_deref().unwrap_or("Dire"),
        }
    }

    pub fn players_on(&self, side: Side) -> impl Iterator<Item = &PlayerMatchEntry> {
        self.players.iter().filter(move |p| p.side() == side)
    }
}

/// One player's line in a match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerMatchEntry {
    /// Registered professional name.
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: Option<String>,
    /// Account display name.
    #[serde(default, deserialize_with = "de_null_default")]
    pub personaname: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub player_slot: u8,
    #[serde(default, deserialize_with = "de_null_default")]
    pub kills: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub deaths: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub assists: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub last_hits: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub denies: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub obs_placed: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub sen_placed: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub roshans_killed: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub win: u8,
}

impl PlayerMatchEntry {
    /// Stable identity for aggregation: pro name, then display name, then
    /// [`UNKNOWN_PLAYER`].
    pub fn display_name(&self) -> &str {
        usable_name(&self.name)
            .or_else(|| usable_name(&self.personaname))
            .unwrap_or(UNKNOWN_PLAYER)
    }

    pub fn side(&self) -> Side {
        Side::from_slot(self.player_slot)
    }

    pub fn wards_placed(&self) -> u32 {
        self.obs_placed.saturating_add(self.sen_placed)
    }

    pub fn won(&self) -> bool {
        self.win == 1
    }
}
