//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use dota_fantasy::{FantasyError, MatchId, MatchRecord, MatchSource, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Match source backed by JSON payloads held in memory.
#[derive(Default)]
pub struct MemorySource {
    payloads: HashMap<MatchId, Value>,
    calls: Mutex<Vec<MatchId>>,
}

impl MemorySource {
    pub fn with(mut self, payload: Value) -> Self {
        let id = MatchId::new(payload["match_id"].as_u64().unwrap());
        self.payloads.insert(id, payload);
        self
    }

    pub fn calls(&self) -> Vec<MatchId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MatchSource for MemorySource {
    async fn fetch_match(&self, match_id: MatchId) -> Result<MatchRecord> {
        self.calls.lock().unwrap().push(match_id);
        match self.payloads.get(&match_id) {
            Some(v) => Ok(serde_json::from_value(v.clone())?),
            None => Err(FantasyError::MatchUnavailable {
                match_id: match_id.as_u64(),
                status: Some(404),
            }),
        }
    }
}

pub fn line(name: &str, slot: u8, k: u32, d: u32, a: u32, win: u8) -> Value {
    json!({
        "name": name,
        "personaname": format!("{}-smurf", name.to_lowercase()),
        "player_slot": slot,
        "kills": k,
        "deaths": d,
        "assists": a,
        "last_hits": 100,
        "denies": 5,
        "obs_placed": 2,
        "sen_placed": null,
        "roshans_killed": if slot < 128 { 1 } else { 0 },
        "win": win
    })
}

/// Spirit (Radiant) beat Liquid (Dire) in 22 minutes.
pub fn spirit_vs_liquid(match_id: u64) -> Value {
    json!({
        "match_id": match_id,
        "duration": 1340,
        "radiant_team": { "name": "Team Spirit" },
        "dire_team": { "name": "Team Liquid" },
        "tower_status_radiant": 0b11111111111,
        "tower_status_dire": 0b00000000111,
        "barracks_status_radiant": 0b111111,
        "barracks_status_dire": 0,
        "players": [
            line("Yatoro", 0, 12, 1, 8, 1),
            line("Larl", 1, 6, 2, 10, 1),
            line("Collapse", 2, 3, 3, 15, 1),
            line("Mira", 3, 1, 4, 14, 1),
            line("Miposhka", 4, 0, 5, 16, 1),
            line("miCKe", 128, 2, 5, 1, 0),
            line("Nisha", 129, 1, 4, 2, 0),
            line("33", 130, 1, 4, 2, 0),
            line("Boxi", 131, 0, 3, 3, 0),
            line("Insania", 132, 0, 6, 2, 0)
        ]
    })
}

/// Liquid (Radiant) beat Spirit (Dire) in 41 minutes; nobody took a Roshan on Dire.
pub fn liquid_vs_spirit(match_id: u64) -> Value {
    json!({
        "match_id": match_id,
        "duration": 2460,
        "radiant_team": { "name": "Team Liquid" },
        "dire_team": { "name": "Team Spirit" },
        "tower_status_radiant": 0b00000111111,
        "tower_status_dire": 0,
        "barracks_status_radiant": 0b111111,
        "barracks_status_dire": 0b000011,
        "players": [
            line("miCKe", 0, 9, 2, 7, 1),
            line("Nisha", 1, 8, 1, 9, 1),
            line("33", 2, 4, 3, 12, 1),
            line("Boxi", 3, 2, 4, 15, 1),
            line("Insania", 4, 1, 4, 17, 1),
            line("Yatoro", 128, 5, 5, 2, 0),
            line("Larl", 129, 3, 4, 4, 0),
            line("Collapse", 130, 0, 5, 6, 0),
            line("Mira", 131, 0, 3, 5, 0),
            line("Miposhka", 132, 0, 6, 6, 0)
        ]
    })
}
