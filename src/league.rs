//! League data files that sit alongside the prepared matchups:
//! teams, the weekly game schedule and player picks.

use crate::export::read_records;
use anyhow::Result;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub name: String,
    pub abbreviation: String,
}

/// One scheduled game. Scores stay empty until the game is played.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Game {
    pub week: u32,
    pub game_number: u32,
    pub game_time: String,
    pub away_team: String,
    pub home_team: String,
    pub away_score: Option<u8>,
    pub home_score: Option<u8>,
}

impl Game {
    /// Winning team abbreviation, `None` if unplayed or tied.
    pub fn winner(&self) -> Option<&str> {
        match (self.away_score, self.home_score) {
            (Some(away), Some(home)) if away > home => Some(self.away_team.as_str()),
            (Some(away), Some(home)) if home > away => Some(self.home_team.as_str()),
            _ => None,
        }
    }
}

/// A player's pick for one game, with a confidence weight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pick {
    pub player_name: String,
    pub week: u32,
    pub game_number: u32,
    pub winning_team: String,
    pub confidence: u8,
    pub method: String,
    pub submission_time_utc: String,
    /// Encoded in the file as `0` (grace applied) or `1` (no grace)
    #[serde(deserialize_with = "grace_flag")]
    pub grace_indicator: bool,
}

fn grace_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?.as_str() {
        "0" => Ok(true),
        "1" => Ok(false),
        other => Err(de::Error::invalid_value(
            Unexpected::Str(other),
            &"either 0 or 1",
        )),
    }
}

pub fn read_teams(path: &Path) -> Result<Vec<Team>> {
    read_records(path, "teams")
}

pub fn read_games(path: &Path) -> Result<Vec<Game>> {
    read_records(path, "games")
}

pub fn read_picks(path: &Path) -> Result<Vec<Pick>> {
    read_records(path, "picks")
}
