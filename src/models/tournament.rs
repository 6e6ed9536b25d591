//! Tournament state, stage machine, and TournamentError.

use crate::models::player::PlayerName;
use crate::models::round::RoundRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 2 players when pairing is requested.
    InsufficientPlayers { available: usize },
    /// Not enough players to start (a bye only makes sense from 3 up).
    NotEnoughPlayersToStart { required: usize },
    /// A match's two slots would hold the same player.
    SelfMatch { index: usize, player: PlayerName },
    /// A player would appear twice within the same round. `first_index` is
    /// the match holding the earlier assignment; `None` means the round's bye.
    DuplicateAssignment {
        index: usize,
        first_index: Option<usize>,
        player: PlayerName,
    },
    /// The final greedy pass could not pair every floated player.
    UnresolvedFloats { players: Vec<PlayerName> },
    /// A player with this name already exists (names are unique).
    DuplicatePlayerName,
    /// Player not found in the roster.
    PlayerNotFound(PlayerName),
    /// Round number outside the configured range.
    RoundOutOfRange { round: u32, rounds: u32 },
    /// No match at this index in the round.
    MatchNotFound { round: u32, index: usize },
    /// Winner bonus must be 0 or 2.
    InvalidBonus(u32),
    /// Tournament is not in a state that allows this action.
    InvalidState,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientPlayers { available } => {
                write!(f, "Need at least 2 players to pair (have {})", available)
            }
            TournamentError::NotEnoughPlayersToStart { required } => {
                write!(f, "Add at least {} players before starting", required)
            }
            TournamentError::SelfMatch { index, player } => {
                write!(
                    f,
                    "\"{}\" cannot face themselves (match {})",
                    player,
                    index + 1
                )
            }
            TournamentError::DuplicateAssignment { player, .. } => {
                write!(
                    f,
                    "\"{}\" is already assigned in another match this round",
                    player
                )
            }
            TournamentError::UnresolvedFloats { players } => {
                write!(f, "Could not pair: {}", players.join(", "))
            }
            TournamentError::DuplicatePlayerName => {
                write!(f, "A player with this name already exists")
            }
            TournamentError::PlayerNotFound(name) => write!(f, "Player \"{}\" not found", name),
            TournamentError::RoundOutOfRange { round, rounds } => {
                write!(f, "Round {} is out of range (1..={})", round, rounds)
            }
            TournamentError::MatchNotFound { round, index } => {
                write!(f, "Round {} has no match {}", round, index + 1)
            }
            TournamentError::InvalidBonus(bonus) => {
                write!(f, "Winner bonus must be 0 or 2 (got {})", bonus)
            }
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Rounds a new tournament is configured with.
pub const DEFAULT_ROUNDS: u32 = 4;
/// Upper bound on the configurable round count.
pub const MAX_ROUNDS: u32 = 9;

/// Where the league night currently is: setup, an active round, or review.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Stage {
    /// Building the roster and picking the round count; not started.
    #[default]
    Setup,
    /// Playing one of the rounds.
    Round { number: u32 },
    /// All rounds done; results awaiting commit to the season totals.
    Review,
}

/// Full tournament state: roster, round sheets, season totals, and stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Roster in insertion order. Names are unique.
    pub players: Vec<PlayerName>,
    /// Configured number of rounds (1..=9).
    pub rounds: u32,
    /// Round sheets by round number, created on demand.
    pub round_records: BTreeMap<u32, RoundRecord>,
    /// Cumulative points per player across committed tournaments.
    pub season_totals: HashMap<PlayerName, u32>,
    pub stage: Stage,
}

impl Tournament {
    /// Create a new tournament in Setup with no players.
    pub fn new(rounds: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Vec::new(),
            rounds: rounds.clamp(1, MAX_ROUNDS),
            round_records: BTreeMap::new(),
            season_totals: HashMap::new(),
            stage: Stage::Setup,
        }
    }

    /// Create a tournament with an initial roster. Still in Setup until started.
    pub fn with_players(players: Vec<PlayerName>, rounds: u32) -> Self {
        Self {
            players,
            ..Self::new(rounds)
        }
    }

    /// The sheet for `round`, created empty on first access.
    pub fn round_entry(&mut self, round: u32) -> &mut RoundRecord {
        self.round_records
            .entry(round)
            .or_insert_with(|| RoundRecord::new(round))
    }

    /// Reject round numbers outside the configured range.
    pub fn check_round(&self, round: u32) -> Result<(), TournamentError> {
        if round == 0 || round > self.rounds {
            return Err(TournamentError::RoundOutOfRange {
                round,
                rounds: self.rounds,
            });
        }
        Ok(())
    }

    /// Add a player. The name is trimmed; empty and duplicate names are rejected.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        if self.players.iter().any(|p| p == trimmed) {
            return Err(TournamentError::DuplicatePlayerName);
        }
        self.players.push(trimmed.to_string());
        Ok(())
    }

    /// Remove a player and scrub them from every sheet: match slots holding
    /// the name are emptied (resetting that match's result) and byes cleared.
    pub fn remove_player(&mut self, name: &str) -> Result<(), TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p == name)
            .ok_or_else(|| TournamentError::PlayerNotFound(name.to_string()))?;
        self.players.remove(idx);
        for record in self.round_records.values_mut() {
            if record.bye.as_deref() == Some(name) {
                record.bye = None;
            }
            for m in &mut record.matches {
                m.clear_player(name);
            }
        }
        Ok(())
    }

    /// Drop the whole roster along with the current sheets. Season totals stay.
    pub fn clear_players(&mut self) {
        self.players.clear();
        self.round_records.clear();
    }

    /// Set the configured round count (clamped to 1..=9) and re-clamp the stage.
    pub fn set_rounds(&mut self, rounds: u32) {
        self.rounds = rounds.clamp(1, MAX_ROUNDS);
        self.clamp_stage();
    }

    pub fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
        self.clamp_stage();
    }

    /// Keep the active round inside the configured range.
    pub fn clamp_stage(&mut self) {
        if let Stage::Round { number } = self.stage {
            self.stage = Stage::Round {
                number: number.clamp(1, self.rounds),
            };
        }
    }

    /// Clear the current sheets without committing anything.
    pub fn clear_current_rounds(&mut self) {
        self.round_records.clear();
    }

    /// Back to a pristine tournament: roster, sheets, totals, and stage all
    /// cleared. The id is kept so clients holding it stay valid.
    pub fn reset(&mut self) {
        *self = Self {
            id: self.id,
            ..Self::new(DEFAULT_ROUNDS)
        };
    }
}
