//! Match sheets: outcomes, individual matches, and per-round records.

use crate::models::player::PlayerName;
use serde::{Deserialize, Serialize};

/// Recorded result of a single match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Not yet recorded.
    #[default]
    Unset,
    AWins,
    BWins,
    Draw,
}

/// Which player slot of a match an edit targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    A,
    B,
}

/// A single 1v1 match on a round sheet. Slots may be empty pending assignment.
///
/// Invariants (enforced by the editing surface): the two slots never hold the
/// same player, and a match missing a participant holds no result.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    #[serde(default)]
    pub slot_a: Option<PlayerName>,
    #[serde(default)]
    pub slot_b: Option<PlayerName>,
    #[serde(default)]
    pub outcome: Outcome,
    /// Winner bonus: 0 or 2, counted for decisive outcomes only.
    #[serde(default)]
    pub bonus: u32,
}

impl GameMatch {
    /// A fresh match with empty slots and no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// A match between two assigned players, result still unset.
    pub fn with_players(a: impl Into<PlayerName>, b: impl Into<PlayerName>) -> Self {
        Self {
            slot_a: Some(a.into()),
            slot_b: Some(b.into()),
            ..Self::default()
        }
    }

    /// Both participants, when fully assigned.
    pub fn participants(&self) -> Option<(&PlayerName, &PlayerName)> {
        match (&self.slot_a, &self.slot_b) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    /// Clear one player out of this match. A match that loses a participant
    /// cannot keep its result.
    pub fn clear_player(&mut self, name: &str) {
        if self.slot_a.as_deref() == Some(name) {
            self.slot_a = None;
        }
        if self.slot_b.as_deref() == Some(name) {
            self.slot_b = None;
        }
        if self.slot_a.is_none() || self.slot_b.is_none() {
            self.outcome = Outcome::Unset;
            self.bonus = 0;
        }
    }
}

/// One round of the tournament: its match sheet plus the optional bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (1-based).
    pub number: u32,
    #[serde(default)]
    pub matches: Vec<GameMatch>,
    /// Player sitting out this round, if any.
    #[serde(default)]
    pub bye: Option<PlayerName>,
}

impl RoundRecord {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            matches: Vec::new(),
            bye: None,
        }
    }
}
