//! CSV export of normalized matchups and the player roster, plus typed
//! read-back of headered CSV files.
//!
//! Output files are always rewritten from scratch. Fields are written
//! verbatim and never quoted; names are assumed not to contain commas.

use crate::models::{Matchup, Player};
use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const MATCHUP_HEADERS: [&str; 4] = ["week", "game_number", "player_1", "player_2"];
pub const PLAYER_HEADERS: [&str; 1] = ["name"];

fn csv_writer<W: Write>(wtr: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Never)
        .from_writer(wtr)
}

/// Write the matchup CSV (header + one line per matchup) to any writer.
pub fn write_matchups<W: Write>(wtr: W, matchups: &[Matchup]) -> Result<()> {
    let mut writer = csv_writer(wtr);
    // Header is written explicitly so an empty list still gets one
    writer.write_record(MATCHUP_HEADERS)?;
    for matchup in matchups {
        writer.serialize(matchup).with_context(|| {
            format!(
                "Failed to write week {} game {}",
                matchup.week, matchup.game_number
            )
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the player CSV (header + one name per line) to any writer.
/// Players are written in the order given.
pub fn write_players<W: Write>(wtr: W, players: &[Player]) -> Result<()> {
    let mut writer = csv_writer(wtr);
    writer.write_record(PLAYER_HEADERS)?;
    for player in players {
        writer.serialize(player)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the matchup CSV to it.
pub fn export_matchups(path: &Path, matchups: &[Matchup]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create matchups file {}", path.display()))?;
    write_matchups(file, matchups)
        .with_context(|| format!("Failed to write matchups to {}", path.display()))?;
    log::info!("Wrote {} matchups to {}", matchups.len(), path.display());
    Ok(())
}

/// Create (or truncate) `path` and write the player CSV to it.
pub fn export_players(path: &Path, players: &[Player]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create players file {}", path.display()))?;
    write_players(file, players)
        .with_context(|| format!("Failed to write players to {}", path.display()))?;
    log::info!("Wrote {} players to {}", players.len(), path.display());
    Ok(())
}

/// Deserialize every record of a headered CSV from any reader.
pub fn read_records_from_reader<T: DeserializeOwned, R: Read>(rdr: R) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new().from_reader(rdr);
    let mut records = Vec::new();
    for (row_num, result) in reader.deserialize().enumerate() {
        // +2: 1-based, plus the header line
        let record: T = result.with_context(|| format!("Bad record on line {}", row_num + 2))?;
        records.push(record);
    }
    Ok(records)
}

/// Deserialize every record of a headered CSV file. `what` names the file in errors.
pub fn read_records<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file {}", what, path.display()))?;
    let records = read_records_from_reader(file)
        .with_context(|| format!("Failed to read {} from {}", what, path.display()))?;
    log::debug!("Read {} {} from {}", records.len(), what, path.display());
    Ok(records)
}

/// Read a previously exported matchup CSV back into records.
pub fn read_matchups(path: &Path) -> Result<Vec<Matchup>> {
    read_records(path, "matchups")
}

/// Read a previously exported player CSV back into records.
pub fn read_players(path: &Path) -> Result<Vec<Player>> {
    read_records(path, "players")
}
