//! Setup phase: starting the league night (Setup -> Round 1).

use crate::logic::pairing::random_first_round;
use crate::models::{GameMatch, Stage, Tournament, TournamentError};

/// Players needed before a tournament can start.
pub const MIN_PLAYERS_TO_START: usize = 3;

/// Start the tournament: draw a random round 1 (unless one was already set
/// up by hand) and move to the round stage.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.stage != Stage::Setup {
        return Err(TournamentError::InvalidState);
    }
    if tournament.players.len() < MIN_PLAYERS_TO_START {
        return Err(TournamentError::NotEnoughPlayersToStart {
            required: MIN_PLAYERS_TO_START,
        });
    }
    let has_round_one = tournament
        .round_records
        .get(&1)
        .map_or(false, |r| !r.matches.is_empty());
    if !has_round_one {
        let drawn = random_first_round(&tournament.players);
        let record = tournament.round_entry(1);
        record.matches = drawn
            .pairings
            .into_iter()
            .map(|(a, b)| GameMatch::with_players(a, b))
            .collect();
        record.bye = drawn.bye;
    }
    tournament.stage = Stage::Round { number: 1 };
    Ok(())
}
