//! Raw matchup grid loading
//!
//! The raw file is comma-separated with a header line, then one line per
//! player: `player,opponent_week1,opponent_week2,...`. Rows may be ragged;
//! the header is never interpreted.

use crate::models::RawRow;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load raw rows from a CSV file, skipping the header line.
pub fn load_raw_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open raw matchups file {}", path.display()))?;
    let rows = load_raw_rows_from_reader(file)
        .with_context(|| format!("Failed to read raw matchups from {}", path.display()))?;

    log::debug!("Loaded {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load raw rows from any reader. The first line is treated as a header and dropped.
pub fn load_raw_rows_from_reader<R: Read>(rdr: R) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let mut rows = Vec::new();
    for (row_num, result) in reader.records().enumerate() {
        // +2: 1-based, plus the header line
        let record = result.with_context(|| format!("Failed to read CSV row {}", row_num + 2))?;
        // Whitespace is stripped at the line edges only; interior spacing is kept
        let last = record.len().saturating_sub(1);
        let tokens = record.iter().enumerate().map(|(i, token)| {
            let token = if i == 0 { token.trim_start() } else { token };
            if i == last {
                token.trim_end()
            } else {
                token
            }
        });
        if let Some(row) = RawRow::from_tokens(tokens) {
            rows.push(row);
        }
    }

    Ok(rows)
}
