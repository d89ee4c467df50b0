//! Single-owner event loop glue: controller plus its reset timer

use std::sync::Arc;
use std::time::Instant;
use log::debug;
use crate::catalog::MoveCatalog;
use crate::controller::{MatchController, Selection};
use crate::error::MatchError;
use crate::game::Player;
use crate::timer::RoundTimer;
use crate::view::MatchView;

/// A command from the input translation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Select { player: Player, index: usize },
    Restart,
}

/// Serializes selections, restarts and the deferred reset for one match
///
/// All mutation goes through [`handle`](Self::handle) and
/// [`tick`](Self::tick); the host calls them from one thread.
#[derive(Clone, Debug)]
pub struct Session {
    controller: MatchController,
    timer: RoundTimer,
}

impl Session {
    pub fn new(catalog: Arc<MoveCatalog>) -> Self {
        Self::with_timer(catalog, RoundTimer::new())
    }

    pub fn with_timer(catalog: Arc<MoveCatalog>, timer: RoundTimer) -> Self {
        Self { controller: MatchController::new(catalog), timer }
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    pub fn view(&self) -> MatchView {
        self.controller.view()
    }

    pub fn handle(&mut self, command: Command, now: Instant) -> Result<Option<Selection>, MatchError> {
        match command {
            Command::Select { player, index } => {
                let selection = self.controller.select_move(player, index)?;
                if let Selection::Resolved { ticket, .. } = selection {
                    self.timer.arm(ticket, now);
                }
                Ok(Some(selection))
            }
            Command::Restart => {
                if let Some(ticket) = self.timer.cancel() {
                    debug!("restart cancelled pending reset {}", ticket.id());
                }
                self.controller.restart_match();
                Ok(None)
            }
        }
    }

    /// Fire the pending reset if due; returns whether state changed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.timer.poll(now) {
            Some(ticket) => self.controller.complete_round(ticket),
            None => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}
