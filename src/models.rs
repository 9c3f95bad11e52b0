//! Record types shared by the loader, normalizer and exporters.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One line of the raw matchup grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Player the row belongs to (first column)
    pub player: String,
    /// Opponent per week, positionally: index 0 is week 1
    pub opponents: Vec<String>,
}

impl RawRow {
    /// Build a row from its tokens: player first, then one opponent per week.
    /// Returns `None` for a row with no tokens at all.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens.into_iter().map(Into::into);
        let player = tokens.next()?;
        Some(Self {
            player,
            opponents: tokens.collect(),
        })
    }

    /// `(week, opponent)` pairs with 1-based weeks, including empty tokens.
    pub fn week_opponents(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        (1u32..).zip(self.opponents.iter().map(String::as_str))
    }
}

/// A single game between two players in a given week.
///
/// `player_1` sorts before `player_2`, so the pair has exactly one spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub week: u32,
    /// 1-based rank of the game within its week
    pub game_number: u32,
    pub player_1: String,
    pub player_2: String,
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Week {}, game {}: {} vs {}",
            self.week, self.game_number, self.player_1, self.player_2
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

/// Unique player names; ordering is applied only when exporting.
pub type Roster = HashSet<String>;

/// Roster as `Player` records in ascending name order.
pub fn sorted_roster(roster: &Roster) -> Vec<Player> {
    let mut names: Vec<&String> = roster.iter().collect();
    names.sort();
    names
        .into_iter()
        .map(|name| Player { name: name.clone() })
        .collect()
}
