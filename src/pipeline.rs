//! End-to-end preparation run used by the CLI.
//!
//! Loads the raw grid once, derives the roster and the numbered matchups
//! from it, then writes both output files.

use crate::export::{export_matchups, export_players};
use crate::loader::load_raw_rows;
use crate::models::{sorted_roster, Matchup, Player};
use crate::normalize::{check_invariants, extract_players, normalize_matchups};
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "data/raw_matchups.csv";
pub const DEFAULT_MATCHUPS_OUTPUT: &str = "data/matchups.csv";
pub const DEFAULT_PLAYERS_OUTPUT: &str = "data/players.csv";

/// Configuration for a preparation run.
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// Raw matchup grid CSV
    pub input: PathBuf,
    /// Destination for the normalized matchup CSV
    pub matchups_output: PathBuf,
    /// Destination for the player roster CSV
    pub players_output: PathBuf,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            matchups_output: PathBuf::from(DEFAULT_MATCHUPS_OUTPUT),
            players_output: PathBuf::from(DEFAULT_PLAYERS_OUTPUT),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct PrepOutcome {
    /// Normalized matchups in output order
    pub matchups: Vec<Matchup>,
    /// Roster in output (ascending) order
    pub players: Vec<Player>,
    /// Number of distinct weeks with at least one game
    pub weeks: usize,
}

impl PrepOutcome {
    pub fn summary(&self) -> String {
        format!(
            "{} matchups across {} weeks, {} players",
            self.matchups.len(),
            self.weeks,
            self.players.len()
        )
    }
}

/// Load, normalize and export. Fails on the first I/O error; a failed
/// write may leave the destination truncated.
pub fn run(config: &PrepConfig) -> Result<PrepOutcome> {
    log::info!("Reading raw matchups from {}", config.input.display());
    let rows = load_raw_rows(&config.input)?;

    let roster = extract_players(&rows);
    let matchups = normalize_matchups(&rows);
    if let Err(e) = check_invariants(&matchups) {
        log::error!("Normalized matchups failed validation: {:#}", e);
        debug_assert!(false, "{:#}", e);
    }

    let weeks = matchups.iter().map(|m| m.week).collect::<BTreeSet<_>>().len();
    if matchups.is_empty() && !rows.is_empty() {
        log::warn!("{} rows loaded but no matchups found", rows.len());
    }

    export_matchups(&config.matchups_output, &matchups)?;

    let players = sorted_roster(&roster);
    export_players(&config.players_output, &players)?;

    Ok(PrepOutcome {
        matchups,
        players,
        weeks,
    })
}
