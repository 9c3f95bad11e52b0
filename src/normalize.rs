//! Matchup normalization
//!
//! Every game in the raw grid is usually recorded twice, once from each
//! player's row. Pairs are canonicalized (names sorted) and deduplicated per
//! week, then numbered 1..N within each week in (player_1, player_2) order.

use crate::models::{Matchup, RawRow, Roster};
use anyhow::{bail, Result};
use std::collections::{BTreeSet, HashSet};

/// Collect every distinct non-empty name appearing anywhere in the rows,
/// including names that only ever show up as opponents.
pub fn extract_players(rows: &[RawRow]) -> Roster {
    rows.iter()
        .flat_map(|row| std::iter::once(&row.player).chain(row.opponents.iter()))
        .filter(|name| !name.is_empty())
        .cloned()
        .collect()
}

/// Deduplicate and number the matchups in the raw rows.
///
/// Empty opponent tokens mean "no game that week" and are skipped, as are
/// rows whose player token is empty. Output is ordered by week, then
/// player_1, then player_2.
pub fn normalize_matchups(rows: &[RawRow]) -> Vec<Matchup> {
    // (week, first name, second name); the set both dedups and sorts
    let mut canonical: BTreeSet<(u32, &str, &str)> = BTreeSet::new();

    for row in rows {
        if row.player.is_empty() {
            continue;
        }
        for (week, opponent) in row.week_opponents() {
            if opponent.is_empty() {
                continue;
            }
            let (a, b) = if row.player.as_str() <= opponent {
                (row.player.as_str(), opponent)
            } else {
                (opponent, row.player.as_str())
            };
            canonical.insert((week, a, b));
        }
    }

    let mut matchups = Vec::with_capacity(canonical.len());
    let mut current_week = None;
    let mut game_number = 0;

    for (week, player_1, player_2) in canonical {
        if current_week == Some(week) {
            game_number += 1;
        } else {
            current_week = Some(week);
            game_number = 1;
        }
        matchups.push(Matchup {
            week,
            game_number,
            player_1: player_1.to_string(),
            player_2: player_2.to_string(),
        });
    }

    matchups
}

/// Verify the ordering and numbering guarantees of a matchup list:
/// canonical pair order, no repeated pair within a week, ascending
/// (week, player_1, player_2) order and dense game numbers per week.
pub fn check_invariants(matchups: &[Matchup]) -> Result<()> {
    let mut seen: HashSet<(u32, &str, &str)> = HashSet::new();
    let mut prev: Option<&Matchup> = None;

    for m in matchups {
        if m.player_1 > m.player_2 {
            bail!("Week {} game {}: players not in canonical order", m.week, m.game_number);
        }
        if !seen.insert((m.week, m.player_1.as_str(), m.player_2.as_str())) {
            bail!(
                "Week {}: pair {} / {} appears more than once",
                m.week,
                m.player_1,
                m.player_2
            );
        }

        let expected_game = match prev {
            Some(p) if p.week == m.week => {
                if (p.player_1.as_str(), p.player_2.as_str())
                    >= (m.player_1.as_str(), m.player_2.as_str())
                {
                    bail!("Week {}: games not in name order", m.week);
                }
                p.game_number + 1
            }
            Some(p) if p.week > m.week => {
                bail!("Week {} listed after week {}", m.week, p.week);
            }
            _ => 1,
        };
        if m.game_number != expected_game {
            bail!(
                "Week {}: expected game number {}, found {}",
                m.week,
                expected_game,
                m.game_number
            );
        }

        prev = Some(m);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tokens: &[&str]) -> RawRow {
        RawRow::from_tokens(tokens.iter().copied()).unwrap()
    }

    fn pairs(matchups: &[Matchup]) -> Vec<(u32, u32, &str, &str)> {
        matchups
            .iter()
            .map(|m| (m.week, m.game_number, m.player_1.as_str(), m.player_2.as_str()))
            .collect()
    }

    #[test]
    fn test_symmetric_rows_collapse() {
        let rows = vec![row(&["Alice", "Bob"]), row(&["Bob", "Alice"])];
        let matchups = normalize_matchups(&rows);
        assert_eq!(pairs(&matchups), vec![(1, 1, "Alice", "Bob")]);
    }

    #[test]
    fn test_empty_opponent_is_no_game() {
        let rows = vec![row(&["Alice", "Bob", "Carol"]), row(&["Bob", "Alice", ""])];
        let matchups = normalize_matchups(&rows);
        assert_eq!(
            pairs(&matchups),
            vec![(1, 1, "Alice", "Bob"), (2, 1, "Alice", "Carol")]
        );
    }

    #[test]
    fn test_game_numbers_reset_each_week() {
        let rows = vec![
            row(&["Dave", "Carol", "Alice"]),
            row(&["Carol", "Dave", "Bob"]),
            row(&["Bob", "Alice", "Carol"]),
            row(&["Alice", "Bob", "Dave"]),
        ];
        let matchups = normalize_matchups(&rows);
        assert_eq!(
            pairs(&matchups),
            vec![
                (1, 1, "Alice", "Bob"),
                (1, 2, "Carol", "Dave"),
                (2, 1, "Alice", "Dave"),
                (2, 2, "Bob", "Carol"),
            ]
        );
        check_invariants(&matchups).unwrap();
    }

    #[test]
    fn test_one_sided_rows_pass_through() {
        // Zed never gets a row of its own
        let rows = vec![row(&["Alice", "Zed"]), row(&["Bob"])];
        let matchups = normalize_matchups(&rows);
        assert_eq!(pairs(&matchups), vec![(1, 1, "Alice", "Zed")]);
    }

    #[test]
    fn test_ragged_rows_skip_weeks() {
        let rows = vec![
            row(&["Alice", "Bob", "", "Carol"]),
            row(&["Bob", "Alice"]),
            row(&["Carol", "", "", "Alice"]),
        ];
        let matchups = normalize_matchups(&rows);
        assert_eq!(
            pairs(&matchups),
            vec![(1, 1, "Alice", "Bob"), (3, 1, "Alice", "Carol")]
        );
    }

    #[test]
    fn test_empty_player_token_contributes_nothing() {
        let rows = vec![row(&["", "Bob"])];
        assert!(normalize_matchups(&rows).is_empty());
        assert!(extract_players(&rows).contains("Bob"));
    }

    #[test]
    fn test_no_rows() {
        assert!(normalize_matchups(&[]).is_empty());
        assert!(extract_players(&[]).is_empty());
    }

    #[test]
    fn test_normalize_is_order_independent() {
        let mut rows = vec![
            row(&["Erin", "Frank", "Gina"]),
            row(&["Frank", "Erin", "Hank"]),
            row(&["Gina", "Hank", "Erin"]),
            row(&["Hank", "Gina", "Frank"]),
        ];
        let forward = normalize_matchups(&rows);
        rows.reverse();
        assert_eq!(normalize_matchups(&rows), forward);
        check_invariants(&forward).unwrap();
    }

    #[test]
    fn test_extract_players_includes_opponent_only_names() {
        let rows = vec![row(&["Alice", "Bob", ""]), row(&["Carol", "Zed"])];
        let roster = extract_players(&rows);
        let mut names: Vec<&str> = roster.iter().map(String::as_str).collect();
        names.sort();
        assert_eq!(names, vec!["Alice", "Bob", "Carol", "Zed"]);
    }

    #[test]
    fn test_check_invariants_error_names_the_problem() {
        let list = [
            Matchup {
                week: 2,
                game_number: 1,
                player_1: "Alice".to_string(),
                player_2: "Bob".to_string(),
            },
            Matchup {
                week: 2,
                game_number: 3,
                player_1: "Carol".to_string(),
                player_2: "Dave".to_string(),
            },
        ];
        let err = check_invariants(&list).unwrap_err();
        assert_eq!(err.to_string(), "Week 2: expected game number 2, found 3");
    }

    #[test]
    fn test_check_invariants_rejects_bad_lists() {
        let m = |week, game_number, p1: &str, p2: &str| Matchup {
            week,
            game_number,
            player_1: p1.to_string(),
            player_2: p2.to_string(),
        };

        assert!(check_invariants(&[m(1, 1, "Bob", "Alice")]).is_err());
        assert!(check_invariants(&[m(1, 1, "Alice", "Bob"), m(1, 2, "Alice", "Bob")]).is_err());
        assert!(check_invariants(&[m(1, 1, "Alice", "Bob"), m(1, 3, "Carol", "Dave")]).is_err());
        assert!(check_invariants(&[m(1, 2, "Alice", "Bob")]).is_err());
        assert!(check_invariants(&[m(2, 1, "Alice", "Bob"), m(1, 1, "Carol", "Dave")]).is_err());
        assert!(check_invariants(&[m(1, 1, "Carol", "Dave"), m(1, 2, "Alice", "Bob")]).is_err());

        assert!(check_invariants(&[
            m(1, 1, "Alice", "Bob"),
            m(1, 2, "Carol", "Dave"),
            m(3, 1, "Alice", "Carol"),
        ])
        .is_ok());
    }
}
