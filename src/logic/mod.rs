//! Tournament business logic: scoring, Swiss pairing, sheet editing, setup.

mod editing;
mod pairing;
mod scoring;
mod setup;

pub use editing::{
    add_match, clear_round, remove_match, set_bonus, set_bye, set_match_slot, set_outcome,
    validate_round,
};
pub use pairing::{generate_swiss_round, random_first_round, swiss_pair, GeneratedRound};
pub use scoring::{
    commit_season_totals, compute_scores, current_leaderboard, leaderboard, season_leaderboard,
    BYE_POINTS, DRAW_POINTS, LOSS_POINTS, WIN_POINTS,
};
pub use setup::{start_tournament, MIN_PLAYERS_TO_START};
