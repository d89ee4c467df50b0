//! Match Logic for shared-keyboard Rock-Paper-Scissors
//!
//! Core round/match state machine for "Piedra, Papel o Tijera".
//! This crate is compiled to:
//! - Native (for the terminal front-end)
//! - WASM (for a browser front-end)

mod catalog;
mod controller;
mod error;
mod game;
mod session;
mod timer;
mod view;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{CatalogSource, MoveCatalog, StaticCatalog, CATALOG_SIZE, DEFAULT_MOVES};
pub use controller::{IgnoreReason, MatchController, MatchPhase, ResetTicket, Selection};
pub use error::MatchError;
pub use game::{resolve_round, Player, RoundOutcome, RoundRecord, Score, WIN_TARGET};
pub use session::{Command, Session};
pub use timer::{RoundTimer, RESET_DELAY};
pub use view::{MatchView, SelectionView, Status};
