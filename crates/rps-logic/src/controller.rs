//! Round/match state machine
//!
//! The controller is the single owner of score, selections and phase.
//! Every method is a synchronous transition; the only deferred action,
//! the post-round reset, is handed back to the caller as a [`ResetTicket`]
//! and applied later through [`MatchController::complete_round`].

use std::sync::Arc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use crate::catalog::MoveCatalog;
use crate::error::MatchError;
use crate::game::{resolve_round, Player, RoundOutcome, RoundRecord, Score};
use crate::view::{MatchView, SelectionView, Status};

/// Position of the controller in the round/match cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    AwaitingFirstSelection,
    AwaitingSecondSelection,
    /// Outcome on display until the reset fires
    RoundResolved,
    /// A player reached the win target; frozen until restart
    MatchOver,
}

impl MatchPhase {
    pub fn accepts_selections(self) -> bool {
        matches!(
            self,
            MatchPhase::AwaitingFirstSelection | MatchPhase::AwaitingSecondSelection
        )
    }
}

/// Handle for the one pending reset of a resolved round
///
/// Only the ticket issued for the current round generation is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetTicket {
    generation: u32,
}

impl ResetTicket {
    pub fn id(self) -> u32 {
        self.generation
    }

    #[cfg_attr(not(feature = "wasm"), allow(dead_code))]
    pub(crate) fn from_id(generation: u32) -> Self {
        Self { generation }
    }
}

/// Why a selection was dropped without changing state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Outcome on display or match over
    RoundLocked,
    /// First input wins; the player already chose this round
    AlreadyChosen,
}

/// Effect of a [`MatchController::select_move`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Stored; waiting on the other player
    Recorded,
    /// Both players chose; schedule `ticket` after [`crate::RESET_DELAY`]
    Resolved { outcome: RoundOutcome, ticket: ResetTicket },
    Ignored(IgnoreReason),
}

#[derive(Clone, Debug)]
pub struct MatchController {
    catalog: Arc<MoveCatalog>,
    score: Score,
    selections: [Option<usize>; 2],
    outcome: Option<RoundOutcome>,
    phase: MatchPhase,
    round: u32,
    generation: u32,
}

impl MatchController {
    pub fn new(catalog: Arc<MoveCatalog>) -> Self {
        Self {
            catalog,
            score: Score::default(),
            selections: [None; 2],
            outcome: None,
            phase: MatchPhase::default(),
            round: 1,
            generation: 0,
        }
    }

    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn selection(&self, player: Player) -> Option<usize> {
        self.selections[player.index()]
    }

    /// 1-based number of the round in play or on display
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Ticket of the reset still owed to the current round, if any
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        (self.phase == MatchPhase::RoundResolved).then_some(ResetTicket {
            generation: self.generation,
        })
    }

    pub fn status(&self) -> Status {
        if self.phase == MatchPhase::MatchOver {
            if let Some(winner) = self.score.winner() {
                return Status::MatchWon(winner);
            }
        }
        match self.selections {
            [Some(_), None] => Status::WaitingFor(Player::Two),
            [None, Some(_)] => Status::WaitingFor(Player::One),
            _ => Status::Idle,
        }
    }

    /// Record `player`'s move for the current round
    ///
    /// Out-of-range indices are rejected before anything else. Selections
    /// while the round is locked, or from a player who already chose, are
    /// ignored. The second selection of a round resolves it immediately.
    pub fn select_move(&mut self, player: Player, index: usize) -> Result<Selection, MatchError> {
        let index = self.catalog.check(index)?;

        if !self.phase.accepts_selections() {
            debug!("{} pressed {} while {:?}; ignored", player, index, self.phase);
            return Ok(Selection::Ignored(IgnoreReason::RoundLocked));
        }
        if self.selections[player.index()].is_some() {
            debug!("{} already chose this round; ignored", player);
            return Ok(Selection::Ignored(IgnoreReason::AlreadyChosen));
        }

        let Some(other_move) = self.selections[player.other().index()] else {
            self.selections[player.index()] = Some(index);
            self.phase = MatchPhase::AwaitingSecondSelection;
            debug!("{} chose; waiting on {}", player, player.other());
            return Ok(Selection::Recorded);
        };

        let (move_1, move_2) = match player {
            Player::One => (index, other_move),
            Player::Two => (other_move, index),
        };
        let outcome = resolve_round(&self.catalog, move_1, move_2)?;
        self.selections[player.index()] = Some(index);
        Ok(self.resolve(move_1, move_2, outcome))
    }

    fn resolve(&mut self, move_1: usize, move_2: usize, outcome: RoundOutcome) -> Selection {
        self.score.award(outcome);
        self.outcome = Some(outcome);
        self.phase = MatchPhase::RoundResolved;

        let record = RoundRecord::new(&self.catalog, self.round, move_1, move_2, outcome, self.score);
        match serde_json::to_string(&record) {
            Ok(json) => info!("round resolved {}", json),
            Err(e) => warn!("round {} resolved, record not serializable: {}", self.round, e),
        }

        Selection::Resolved {
            outcome,
            ticket: ResetTicket { generation: self.generation },
        }
    }

    /// Apply the deferred post-round reset
    ///
    /// Returns `false` without touching state when the ticket is stale
    /// (restart happened, or the reset already ran).
    pub fn complete_round(&mut self, ticket: ResetTicket) -> bool {
        if self.pending_reset() != Some(ticket) {
            debug!("stale reset ticket {} ignored", ticket.id());
            return false;
        }

        self.clear_round();
        self.generation = self.generation.wrapping_add(1);

        if let Some(winner) = self.score.winner() {
            self.phase = MatchPhase::MatchOver;
            info!(
                "match over: {} wins {}-{}",
                winner,
                self.score.get(winner),
                self.score.get(winner.other())
            );
        } else {
            self.phase = MatchPhase::AwaitingFirstSelection;
            self.round += 1;
        }
        true
    }

    /// Hard reset to a fresh match; invalidates any pending reset
    pub fn restart_match(&mut self) {
        self.score = Score::default();
        self.clear_round();
        self.phase = MatchPhase::AwaitingFirstSelection;
        self.round = 1;
        self.generation = self.generation.wrapping_add(1);
        info!("match restarted");
    }

    fn clear_round(&mut self) {
        self.selections = [None; 2];
        self.outcome = None;
    }

    pub fn view(&self) -> MatchView {
        let selection = |player: Player| {
            self.selection(player).and_then(|index| {
                let name = self.catalog.name(index)?.to_string();
                Some(SelectionView { index, name })
            })
        };
        let winner = match self.phase {
            MatchPhase::MatchOver => self.score.winner(),
            _ => None,
        };

        MatchView {
            phase: self.phase,
            round: self.round,
            moves: self.catalog.iter().map(String::from).collect(),
            selections: [selection(Player::One), selection(Player::Two)],
            outcome: self.outcome,
            outcome_label: self.outcome.map(|o| o.to_string()),
            score: self.score,
            status: self.status().to_string(),
            match_over: self.phase == MatchPhase::MatchOver,
            winner,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Event {
        Select(Player, usize),
        Reset,
        Restart,
    }

    fn player() -> impl Strategy<Value = Player> {
        prop_oneof![Just(Player::One), Just(Player::Two)]
    }

    fn event() -> impl Strategy<Value = Event> {
        prop_oneof![
            6 => (player(), 0usize..3).prop_map(|(p, i)| Event::Select(p, i)),
            3 => Just(Event::Reset),
            1 => Just(Event::Restart),
        ]
    }

    fn controller() -> MatchController {
        MatchController::new(Arc::new(MoveCatalog::default()))
    }

    proptest! {
        #[test]
        fn equal_moves_tie(index in 0usize..3) {
            let mut c = controller();
            c.select_move(Player::One, index).unwrap();
            let result = c.select_move(Player::Two, index).unwrap();
            prop_assert!(
                matches!(result, Selection::Resolved { outcome: RoundOutcome::Tie, .. }),
                "equal moves must tie"
            );
            prop_assert_eq!(c.score(), Score::default());
        }

        #[test]
        fn unequal_moves_award_one_point(a in 0usize..3, b in 0usize..3) {
            prop_assume!(a != b);
            let catalog = MoveCatalog::default();
            prop_assert!(catalog.beats(a, b).unwrap() ^ catalog.beats(b, a).unwrap());

            let mut c = controller();
            c.select_move(Player::One, a).unwrap();
            c.select_move(Player::Two, b).unwrap();
            let expected = if catalog.beats(a, b).unwrap() {
                Score { player1: 1, player2: 0 }
            } else {
                Score { player1: 0, player2: 1 }
            };
            prop_assert_eq!(c.score(), expected);
        }

        #[test]
        fn invariants_hold_over_any_event_sequence(
            events in proptest::collection::vec(event(), 0..80)
        ) {
            let mut c = controller();
            for event in events {
                let before = c.score();
                let restarting = matches!(event, Event::Restart);
                match event {
                    Event::Select(p, i) => { c.select_move(p, i).unwrap(); }
                    Event::Reset => {
                        if let Some(ticket) = c.pending_reset() {
                            prop_assert!(c.complete_round(ticket));
                        }
                    }
                    Event::Restart => c.restart_match(),
                }
                let after = c.score();

                prop_assert!(after.player1 <= 3 && after.player2 <= 3);
                if restarting {
                    prop_assert_eq!(after, Score::default());
                    prop_assert_eq!(c.phase(), MatchPhase::AwaitingFirstSelection);
                } else {
                    prop_assert!(after.player1 >= before.player1);
                    prop_assert!(after.player2 >= before.player2);
                    prop_assert!(
                        (after.player1 + after.player2) - (before.player1 + before.player2) <= 1
                    );
                }

                let chosen = Player::ALL.iter().filter(|p| c.selection(**p).is_some()).count();
                match c.phase() {
                    MatchPhase::AwaitingFirstSelection => prop_assert_eq!(chosen, 0),
                    MatchPhase::AwaitingSecondSelection => prop_assert_eq!(chosen, 1),
                    MatchPhase::RoundResolved => {
                        prop_assert_eq!(chosen, 2);
                        prop_assert!(c.outcome().is_some());
                    }
                    MatchPhase::MatchOver => {
                        prop_assert_eq!(chosen, 0);
                        prop_assert!(c.score().winner().is_some());
                    }
                }
                if c.phase() != MatchPhase::RoundResolved {
                    prop_assert!(c.outcome().is_none());
                }
            }
        }
    }
}
