//! Pick'em matchup prep - normalize a raw weekly matchup grid
//!
//! Reads the raw grid (one row per player, one opponent column per week),
//! writes the deduplicated, numbered matchups and the sorted player roster,
//! then lists the matchups on stdout.

use anyhow::Result;
use clap::Parser;
use pickem_prep::pipeline::{
    run, PrepConfig, DEFAULT_INPUT, DEFAULT_MATCHUPS_OUTPUT, DEFAULT_PLAYERS_OUTPUT,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prep-matchups")]
#[command(about = "Normalize raw weekly matchups into numbered games and a player list")]
struct Cli {
    /// Raw matchup CSV (header line, then player,opponent_week1,opponent_week2,...)
    #[arg(short, long, env = "PICKEM_RAW_MATCHUPS", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output CSV for the normalized matchups
    #[arg(short, long, default_value = DEFAULT_MATCHUPS_OUTPUT)]
    matchups: PathBuf,

    /// Output CSV for the player roster
    #[arg(short, long, default_value = DEFAULT_PLAYERS_OUTPUT)]
    players: PathBuf,

    /// Don't list the matchups on stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = PrepConfig {
        input: cli.input,
        matchups_output: cli.matchups,
        players_output: cli.players,
    };
    let outcome = run(&config)?;

    if !cli.quiet {
        for matchup in &outcome.matchups {
            println!("{}", matchup);
        }
    }
    eprintln!("Done! {}", outcome.summary());

    Ok(())
}
