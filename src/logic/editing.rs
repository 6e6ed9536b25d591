//! Manual round-sheet editing: matches, slots, outcomes, bonuses, and byes.
//! Every slot or bye edit re-validates the whole round and reverts on failure.

use crate::models::{GameMatch, Outcome, PlayerName, RoundRecord, Slot, Tournament, TournamentError};
use std::collections::HashMap;

/// Check a round sheet's assignments: no self-matches, and nobody in two
/// places (two matches, or a match and the bye). The error carries the
/// offending match index and player so callers can point at the conflict.
pub fn validate_round(record: &RoundRecord) -> Result<(), TournamentError> {
    // player -> earliest assignment (None = the bye)
    let mut used: HashMap<&str, Option<usize>> = HashMap::new();
    if let Some(bye) = &record.bye {
        used.insert(bye.as_str(), None);
    }
    for (i, m) in record.matches.iter().enumerate() {
        if let Some((a, b)) = m.participants() {
            if a == b {
                return Err(TournamentError::SelfMatch {
                    index: i,
                    player: a.clone(),
                });
            }
        }
        for slot in [&m.slot_a, &m.slot_b] {
            if let Some(player) = slot {
                if let Some(first) = used.get(player.as_str()) {
                    return Err(TournamentError::DuplicateAssignment {
                        index: i,
                        first_index: *first,
                        player: player.clone(),
                    });
                }
                used.insert(player.as_str(), Some(i));
            }
        }
    }
    Ok(())
}

/// Append an empty match to a round sheet (created on demand).
pub fn add_match(tournament: &mut Tournament, round: u32) -> Result<(), TournamentError> {
    tournament.check_round(round)?;
    tournament.round_entry(round).matches.push(GameMatch::new());
    Ok(())
}

/// Remove one match from a round sheet.
pub fn remove_match(
    tournament: &mut Tournament,
    round: u32,
    index: usize,
) -> Result<(), TournamentError> {
    tournament.check_round(round)?;
    let record = tournament.round_entry(round);
    if index >= record.matches.len() {
        return Err(TournamentError::MatchNotFound { round, index });
    }
    record.matches.remove(index);
    Ok(())
}

/// Put `player` (or nothing) into one slot of a match. The whole round is
/// re-validated; on failure the previous assignment is restored and the
/// error names the conflict. Emptying a slot also resets the match's result.
pub fn set_match_slot(
    tournament: &mut Tournament,
    round: u32,
    index: usize,
    slot: Slot,
    player: Option<PlayerName>,
) -> Result<(), TournamentError> {
    tournament.check_round(round)?;
    if let Some(name) = &player {
        if !tournament.players.iter().any(|p| p == name) {
            return Err(TournamentError::PlayerNotFound(name.clone()));
        }
    }
    let record = tournament.round_entry(round);
    let m = record
        .matches
        .get_mut(index)
        .ok_or(TournamentError::MatchNotFound { round, index })?;
    let target = match slot {
        Slot::A => &mut m.slot_a,
        Slot::B => &mut m.slot_b,
    };
    let before = std::mem::replace(target, player);
    if let Err(e) = validate_round(record) {
        let m = &mut record.matches[index];
        match slot {
            Slot::A => m.slot_a = before,
            Slot::B => m.slot_b = before,
        }
        return Err(e);
    }
    let m = &mut record.matches[index];
    if m.slot_a.is_none() || m.slot_b.is_none() {
        m.outcome = Outcome::Unset;
        m.bonus = 0;
    }
    Ok(())
}

/// Record a match's outcome.
pub fn set_outcome(
    tournament: &mut Tournament,
    round: u32,
    index: usize,
    outcome: Outcome,
) -> Result<(), TournamentError> {
    tournament.check_round(round)?;
    let record = tournament.round_entry(round);
    let m = record
        .matches
        .get_mut(index)
        .ok_or(TournamentError::MatchNotFound { round, index })?;
    m.outcome = outcome;
    Ok(())
}

/// Record a match's winner bonus (0 or 2).
pub fn set_bonus(
    tournament: &mut Tournament,
    round: u32,
    index: usize,
    bonus: u32,
) -> Result<(), TournamentError> {
    tournament.check_round(round)?;
    if bonus != 0 && bonus != 2 {
        return Err(TournamentError::InvalidBonus(bonus));
    }
    let record = tournament.round_entry(round);
    let m = record
        .matches
        .get_mut(index)
        .ok_or(TournamentError::MatchNotFound { round, index })?;
    m.bonus = bonus;
    Ok(())
}

/// Assign (or clear) a round's bye. A bye player cannot also sit in a match
/// that round; invalid assignments are rejected and the old bye restored.
pub fn set_bye(
    tournament: &mut Tournament,
    round: u32,
    player: Option<PlayerName>,
) -> Result<(), TournamentError> {
    tournament.check_round(round)?;
    if let Some(name) = &player {
        if !tournament.players.iter().any(|p| p == name) {
            return Err(TournamentError::PlayerNotFound(name.clone()));
        }
    }
    let record = tournament.round_entry(round);
    let before = std::mem::replace(&mut record.bye, player);
    if let Err(e) = validate_round(record) {
        record.bye = before;
        return Err(e);
    }
    Ok(())
}

/// Drop a round's sheet entirely (matches and bye).
pub fn clear_round(tournament: &mut Tournament, round: u32) -> Result<(), TournamentError> {
    tournament.check_round(round)?;
    tournament.round_records.remove(&round);
    Ok(())
}
