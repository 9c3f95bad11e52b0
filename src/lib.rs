//! Pick'em Prep
//!
//! Pre-processing for pick'em league data.
//!
//! This library provides:
//! - `loader`: Reads the raw weekly matchup grid (one row per player)
//! - `normalize`: Collapses symmetric pairings into numbered games and builds the roster
//! - `export`: Writes (and reads back) the normalized matchup and player CSVs
//! - `league`: Typed readers for the team, game schedule and pick CSVs
//! - `pipeline`: The end-to-end load/normalize/export run used by the CLI
//!
//! Binaries:
//! - `prep-matchups`: Runs both exports and lists the matchups on the console

pub mod export;
pub mod league;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod pipeline;

pub use models::{Matchup, Player, RawRow, Roster};
