//! Card-game league night manager: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    add_match, clear_round, commit_season_totals, compute_scores, current_leaderboard,
    generate_swiss_round, leaderboard, random_first_round, remove_match, season_leaderboard,
    set_bonus, set_bye, set_match_slot, set_outcome, start_tournament, swiss_pair, validate_round,
    GeneratedRound, MIN_PLAYERS_TO_START,
};
pub use models::{
    GameMatch, LeaderboardRow, Outcome, PlayerName, RoundRecord, Slot, Stage, Tournament,
    TournamentError, TournamentId, DEFAULT_ROUNDS, MAX_ROUNDS,
};
