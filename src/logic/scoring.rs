//! Scoring engine: running totals from round sheets, leaderboards, season totals.

use crate::models::{LeaderboardRow, Outcome, PlayerName, RoundRecord, Stage, Tournament};
use std::collections::{BTreeMap, HashMap};

/// Points for winning a match (before any bonus).
pub const WIN_POINTS: u32 = 3;
/// Points for losing a played match.
pub const LOSS_POINTS: u32 = 1;
/// Points each side takes from a draw.
pub const DRAW_POINTS: u32 = 2;
/// Points for sitting out with the bye.
pub const BYE_POINTS: u32 = 2;

fn award(scores: &mut HashMap<PlayerName, u32>, name: &PlayerName, points: u32) {
    // names on stale sheets that are no longer on the roster are ignored
    if let Some(total) = scores.get_mut(name) {
        *total += points;
    }
}

/// Compute every player's running total over rounds `1..=round_count`.
///
/// Unplayed rounds have no sheet and contribute nothing, so this is the
/// total over all completed rounds so far. Sheets for rounds above the
/// configured count are ignored. Roster players with no results score 0.
pub fn compute_scores(
    players: &[PlayerName],
    records: &BTreeMap<u32, RoundRecord>,
    round_count: u32,
) -> HashMap<PlayerName, u32> {
    let mut scores: HashMap<PlayerName, u32> = players.iter().map(|p| (p.clone(), 0)).collect();

    for round in 1..=round_count {
        let record = match records.get(&round) {
            Some(r) => r,
            None => continue,
        };
        if let Some(bye) = &record.bye {
            award(&mut scores, bye, BYE_POINTS);
        }
        for m in &record.matches {
            let (a, b) = match m.participants() {
                Some(pair) => pair,
                None => continue,
            };
            match m.outcome {
                Outcome::AWins => {
                    award(&mut scores, a, WIN_POINTS + m.bonus);
                    award(&mut scores, b, LOSS_POINTS);
                }
                Outcome::BWins => {
                    award(&mut scores, b, WIN_POINTS + m.bonus);
                    award(&mut scores, a, LOSS_POINTS);
                }
                Outcome::Draw => {
                    award(&mut scores, a, DRAW_POINTS);
                    award(&mut scores, b, DRAW_POINTS);
                }
                Outcome::Unset => {}
            }
        }
    }
    scores
}

/// Rank `players` by `totals`: points descending, ties by name ascending,
/// 1-based ranks. Players without an entry score 0.
pub fn leaderboard(
    players: &[PlayerName],
    totals: &HashMap<PlayerName, u32>,
) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = players
        .iter()
        .map(|p| LeaderboardRow {
            rank: 0,
            player: p.clone(),
            points: totals.get(p).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.player.cmp(&b.player)));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Current-match standings.
pub fn current_leaderboard(tournament: &Tournament) -> Vec<LeaderboardRow> {
    let scores = compute_scores(
        &tournament.players,
        &tournament.round_records,
        tournament.rounds,
    );
    leaderboard(&tournament.players, &scores)
}

/// Season-totals standings.
pub fn season_leaderboard(tournament: &Tournament) -> Vec<LeaderboardRow> {
    leaderboard(&tournament.players, &tournament.season_totals)
}

/// Fold the current scores into the season totals for every roster player,
/// clear the sheets, and return to Setup ("submit results"). Totals of
/// players no longer on the roster are left untouched.
pub fn commit_season_totals(tournament: &mut Tournament) {
    let scores = compute_scores(
        &tournament.players,
        &tournament.round_records,
        tournament.rounds,
    );
    for p in &tournament.players {
        let gained = scores.get(p).copied().unwrap_or(0);
        *tournament.season_totals.entry(p.clone()).or_insert(0) += gained;
    }
    tournament.round_records.clear();
    tournament.stage = Stage::Setup;
}
