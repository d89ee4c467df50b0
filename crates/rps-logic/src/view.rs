//! Observable match state for renderers

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::controller::MatchPhase;
use crate::game::{Player, RoundOutcome, Score};

/// Human-readable status line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Nobody is pending: fresh round, or both players chose
    Idle,
    /// Exactly one player chose; the named player is pending
    WaitingFor(Player),
    /// Match frozen with a winner
    MatchWon(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::WaitingFor(player) => write!(f, "Esperando al {}...", player),
            Status::MatchWon(player) => write!(f, "{} ha ganado la partida", player),
        }
    }
}

/// A player's move as shown on screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionView {
    pub index: usize,
    pub name: String,
}

/// Snapshot of everything a renderer needs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub phase: MatchPhase,
    pub round: u32,
    pub moves: Vec<String>,
    /// Indexed by [`Player::index`]
    pub selections: [Option<SelectionView>; 2],
    pub outcome: Option<RoundOutcome>,
    pub outcome_label: Option<String>,
    pub score: Score,
    pub status: String,
    pub match_over: bool,
    pub winner: Option<Player>,
}

impl MatchView {
    pub fn selection(&self, player: Player) -> Option<&SelectionView> {
        self.selections[player.index()].as_ref()
    }
}
