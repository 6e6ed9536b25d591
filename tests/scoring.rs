//! Integration tests for the scoring engine, leaderboards, and season totals.

use card_league_web::{
    commit_season_totals, compute_scores, current_leaderboard, season_leaderboard, GameMatch,
    Outcome, RoundRecord, Stage, Tournament,
};

fn tournament_with_players(names: &[&str]) -> Tournament {
    Tournament::with_players(names.iter().map(|s| s.to_string()).collect(), 4)
}

#[test]
fn no_rounds_played_scores_zero_for_everyone() {
    let t = tournament_with_players(&["A", "B", "C"]);
    let scores = compute_scores(&t.players, &t.round_records, t.rounds);
    assert_eq!(scores.len(), 3);
    assert!(scores.values().all(|&s| s == 0));
}

#[test]
fn decisive_match_awards_three_plus_bonus_and_one() {
    let mut t = tournament_with_players(&["A", "B"]);
    let r1 = t.round_entry(1);
    let mut m = GameMatch::with_players("A", "B");
    m.outcome = Outcome::AWins;
    m.bonus = 2;
    r1.matches.push(m);

    let scores = compute_scores(&t.players, &t.round_records, t.rounds);
    assert_eq!(scores["A"], 5);
    assert_eq!(scores["B"], 1);
}

#[test]
fn b_wins_is_symmetric() {
    let mut t = tournament_with_players(&["A", "B"]);
    let r1 = t.round_entry(1);
    let mut m = GameMatch::with_players("A", "B");
    m.outcome = Outcome::BWins;
    r1.matches.push(m);

    let scores = compute_scores(&t.players, &t.round_records, t.rounds);
    assert_eq!(scores["A"], 1);
    assert_eq!(scores["B"], 3);
}

#[test]
fn draw_awards_two_each_and_ignores_bonus() {
    let mut t = tournament_with_players(&["A", "B"]);
    let r1 = t.round_entry(1);
    let mut m = GameMatch::with_players("A", "B");
    m.outcome = Outcome::Draw;
    m.bonus = 2;
    r1.matches.push(m);

    let scores = compute_scores(&t.players, &t.round_records, t.rounds);
    assert_eq!(scores["A"], 2);
    assert_eq!(scores["B"], 2);
}

#[test]
fn bye_grants_two_points() {
    let mut t = tournament_with_players(&["A", "B", "C"]);
    t.round_entry(1).bye = Some("C".to_string());

    let scores = compute_scores(&t.players, &t.round_records, t.rounds);
    assert_eq!(scores["C"], 2);
    assert_eq!(scores["A"], 0);
}

#[test]
fn unset_and_incomplete_matches_contribute_nothing() {
    let mut t = tournament_with_players(&["A", "B"]);
    let r1 = t.round_entry(1);
    r1.matches.push(GameMatch::with_players("A", "B")); // outcome unset
    let half_filled = GameMatch {
        slot_a: Some("A".to_string()),
        slot_b: None,
        outcome: Outcome::AWins,
        bonus: 2,
    };
    r1.matches.push(half_filled);

    let scores = compute_scores(&t.players, &t.round_records, t.rounds);
    assert_eq!(scores["A"], 0);
    assert_eq!(scores["B"], 0);
}

#[test]
fn names_absent_from_the_roster_are_ignored() {
    let mut t = tournament_with_players(&["A", "B"]);
    let r1 = t.round_entry(1);
    let mut m = GameMatch::with_players("A", "Ghost");
    m.outcome = Outcome::BWins;
    r1.matches.push(m);
    r1.bye = Some("Phantom".to_string());

    let scores = compute_scores(&t.players, &t.round_records, t.rounds);
    assert_eq!(scores["A"], 1);
    assert!(!scores.contains_key("Ghost"));
    assert!(!scores.contains_key("Phantom"));
}

#[test]
fn sheets_above_the_configured_round_count_are_not_scored() {
    let mut t = tournament_with_players(&["A", "B"]);
    t.set_rounds(2);
    let mut stale = RoundRecord::new(3);
    stale.bye = Some("A".to_string());
    t.round_records.insert(3, stale);

    let scores = compute_scores(&t.players, &t.round_records, t.rounds);
    assert_eq!(scores["A"], 0);
}

#[test]
fn leaderboard_sorts_by_points_then_name() {
    let mut t = tournament_with_players(&["Cal", "Ann", "Ben"]);
    let r1 = t.round_entry(1);
    let mut m = GameMatch::with_players("Ben", "Cal");
    m.outcome = Outcome::AWins;
    r1.matches.push(m);
    r1.bye = Some("Ann".to_string());

    // Ben=3, Ann=2, Cal=1
    let rows = current_leaderboard(&t);
    let order: Vec<(&str, u32, usize)> = rows
        .iter()
        .map(|r| (r.player.as_str(), r.points, r.rank))
        .collect();
    assert_eq!(order, vec![("Ben", 3, 1), ("Ann", 2, 2), ("Cal", 1, 3)]);
}

#[test]
fn equal_points_break_ties_by_name_ascending() {
    let t = tournament_with_players(&["Cal", "Ann", "Ben"]);
    let rows = current_leaderboard(&t);
    let order: Vec<&str> = rows.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(order, vec!["Ann", "Ben", "Cal"]);
}

#[test]
fn commit_folds_scores_into_season_totals_and_clears_sheets() {
    let mut t = tournament_with_players(&["A", "B", "C"]);
    let r1 = t.round_entry(1);
    let mut m = GameMatch::with_players("A", "B");
    m.outcome = Outcome::AWins;
    r1.matches.push(m);
    r1.bye = Some("C".to_string());
    t.set_stage(Stage::Review);

    commit_season_totals(&mut t);
    assert_eq!(t.season_totals["A"], 3);
    assert_eq!(t.season_totals["B"], 1);
    assert_eq!(t.season_totals["C"], 2);
    assert!(t.round_records.is_empty());
    assert_eq!(t.stage, Stage::Setup);

    // a second night accumulates on top
    let r1 = t.round_entry(1);
    let mut m = GameMatch::with_players("B", "C");
    m.outcome = Outcome::AWins;
    m.bonus = 2;
    r1.matches.push(m);
    commit_season_totals(&mut t);
    assert_eq!(t.season_totals["A"], 3);
    assert_eq!(t.season_totals["B"], 6);
    assert_eq!(t.season_totals["C"], 3);
}

#[test]
fn season_leaderboard_lists_roster_players_only() {
    let mut t = tournament_with_players(&["A", "B"]);
    t.season_totals.insert("A".to_string(), 7);
    t.season_totals.insert("Gone".to_string(), 99);

    let rows = season_leaderboard(&t);
    let order: Vec<(&str, u32)> = rows.iter().map(|r| (r.player.as_str(), r.points)).collect();
    assert_eq!(order, vec![("A", 7), ("B", 0)]);
}
