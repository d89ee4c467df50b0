//! Round resolution and match scoring

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::catalog::MoveCatalog;
use crate::error::MatchError;

/// Round wins needed to take the match
pub const WIN_TARGET: u8 = 3;

/// One of the two players sharing the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Slot in per-player arrays
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// 1-based number as shown to the players
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl TryFrom<u8> for Player {
    type Error = MatchError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(MatchError::UnknownPlayer(n)),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jugador {}", self.number())
    }
}

/// Outcome of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Tie,
    Player1Wins,
    Player2Wins,
}

impl RoundOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundOutcome::Tie => None,
            RoundOutcome::Player1Wins => Some(Player::One),
            RoundOutcome::Player2Wins => Some(Player::Two),
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            None => write!(f, "Empate"),
            Some(player) => write!(f, "{} ha ganado la ronda", player),
        }
    }
}

/// Resolve a round from both players' move indices
///
/// Identical moves tie; otherwise the catalog's cyclic relation picks
/// the winner. Indices outside the catalog are rejected.
pub fn resolve_round(
    catalog: &MoveCatalog,
    move_1: usize,
    move_2: usize,
) -> Result<RoundOutcome, MatchError> {
    let outcome = if catalog.beats(move_1, move_2)? {
        RoundOutcome::Player1Wins
    } else if move_1 == move_2 {
        RoundOutcome::Tie
    } else {
        RoundOutcome::Player2Wins
    };
    Ok(outcome)
}

/// Round wins per player within the current match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u8,
    pub player2: u8,
}

impl Score {
    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Credit the round winner. Ties and finished matches leave the score alone.
    pub fn award(&mut self, outcome: RoundOutcome) {
        if self.winner().is_some() {
            return;
        }
        match outcome {
            RoundOutcome::Tie => {}
            RoundOutcome::Player1Wins => self.player1 += 1,
            RoundOutcome::Player2Wins => self.player2 += 1,
        }
    }

    /// The player who reached [`WIN_TARGET`], if any
    pub fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|p| self.get(*p) >= WIN_TARGET)
    }
}

/// Summary of a resolved round, logged as one JSON line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub move_1: String,
    pub move_2: String,
    pub outcome: RoundOutcome,
    pub score: Score,
}

impl RoundRecord {
    pub(crate) fn new(
        catalog: &MoveCatalog,
        round: u32,
        move_1: usize,
        move_2: usize,
        outcome: RoundOutcome,
        score: Score,
    ) -> Self {
        Self {
            round,
            move_1: catalog.name(move_1).unwrap_or_default().to_string(),
            move_2: catalog.name(move_2).unwrap_or_default().to_string(),
            outcome,
            score,
        }
    }
}

impl From<Player> for RoundOutcome {
    fn from(player: Player) -> Self {
        match player {
            Player::One => RoundOutcome::Player1Wins,
            Player::Two => RoundOutcome::Player2Wins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn rps() -> MoveCatalog {
        MoveCatalog::from_source(&StaticCatalog::new(["Rock", "Paper", "Scissors"])).unwrap()
    }

    #[test]
    fn test_outcome_table() {
        let catalog = rps();
        let expected = [
            // (p1, p2, outcome)
            (0, 0, RoundOutcome::Tie),
            (0, 1, RoundOutcome::Player2Wins),
            (0, 2, RoundOutcome::Player1Wins),
            (1, 0, RoundOutcome::Player1Wins),
            (1, 1, RoundOutcome::Tie),
            (1, 2, RoundOutcome::Player2Wins),
            (2, 0, RoundOutcome::Player2Wins),
            (2, 1, RoundOutcome::Player1Wins),
            (2, 2, RoundOutcome::Tie),
        ];
        for (a, b, outcome) in expected {
            assert_eq!(resolve_round(&catalog, a, b), Ok(outcome), "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_moves() {
        let catalog = rps();
        assert_eq!(
            resolve_round(&catalog, 3, 2),
            Err(MatchError::MoveOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            resolve_round(&catalog, 0, 3),
            Err(MatchError::MoveOutOfRange { index: 3, len: 3 })
        );
        // Equal but unknown indices are not a tie
        assert_eq!(
            resolve_round(&catalog, 7, 7),
            Err(MatchError::MoveOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_player_from_number() {
        assert_eq!(Player::try_from(1), Ok(Player::One));
        assert_eq!(Player::try_from(2), Ok(Player::Two));
        assert_eq!(Player::try_from(0), Err(MatchError::UnknownPlayer(0)));
        assert_eq!(Player::try_from(3), Err(MatchError::UnknownPlayer(3)));
    }

    #[test]
    fn test_player_other() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::Two.number(), 2);
    }

    #[test]
    fn test_award_counts_decisive_rounds() {
        let mut score = Score::default();
        score.award(RoundOutcome::Tie);
        assert_eq!(score, Score::default());

        score.award(RoundOutcome::Player1Wins);
        score.award(RoundOutcome::Player2Wins);
        score.award(RoundOutcome::Player2Wins);
        assert_eq!(score, Score { player1: 1, player2: 2 });
        assert_eq!(score.winner(), None);
    }

    #[test]
    fn test_score_capped_at_target() {
        let mut score = Score::default();
        for _ in 0..5 {
            score.award(RoundOutcome::from(Player::Two));
        }
        assert_eq!(score.player2, WIN_TARGET);
        assert_eq!(score.winner(), Some(Player::Two));

        score.award(RoundOutcome::Player1Wins);
        assert_eq!(score.player1, 0);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(RoundOutcome::Tie.to_string(), "Empate");
        assert_eq!(RoundOutcome::Player1Wins.to_string(), "Jugador 1 ha ganado la ronda");
        assert_eq!(RoundOutcome::Player2Wins.to_string(), "Jugador 2 ha ganado la ronda");
    }

    #[test]
    fn test_round_record_json() {
        let catalog = rps();
        let record = RoundRecord::new(
            &catalog,
            1,
            0,
            2,
            RoundOutcome::Player1Wins,
            Score { player1: 1, player2: 0 },
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"round":1,"move_1":"Rock","move_2":"Scissors","outcome":"Player1Wins","score":{"player1":1,"player2":0}}"#
        );
    }
}
