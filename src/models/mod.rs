//! Data structures for the card league: players, match sheets, tournament state.

mod player;
mod round;
mod tournament;

pub use player::{LeaderboardRow, PlayerName};
pub use round::{GameMatch, Outcome, RoundRecord, Slot};
pub use tournament::{
    Stage, Tournament, TournamentError, TournamentId, DEFAULT_ROUNDS, MAX_ROUNDS,
};
