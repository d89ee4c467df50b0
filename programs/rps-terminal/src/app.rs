//! Screen routing and input binding lifecycle

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use log::{info, warn};
use rps_logic::{Command, MatchView, MoveCatalog, Session};

use crate::keymap::KeyBindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
}

/// A running match with the player keys bound to it
///
/// Dropping it unbinds the keys and discards any pending reset.
#[derive(Debug)]
struct BoundGame {
    session: Session,
    keys: KeyBindings,
}

pub struct App {
    catalog: Arc<MoveCatalog>,
    bindings: KeyBindings,
    screen: Screen,
    game: Option<BoundGame>,
    pub should_quit: bool,
    pub last_error: Option<String>,
}

impl App {
    pub fn new(catalog: Arc<MoveCatalog>, bindings: KeyBindings) -> Self {
        Self {
            catalog,
            bindings,
            screen: Screen::Menu,
            game: None,
            should_quit: false,
            last_error: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_bound(&self) -> bool {
        self.game.is_some()
    }

    /// Snapshot of the match in play, if any
    pub fn view(&self) -> Option<MatchView> {
        self.game.as_ref().map(|g| g.session.view())
    }

    pub fn start_game(&mut self) {
        self.game = Some(BoundGame {
            session: Session::new(Arc::clone(&self.catalog)),
            keys: self.bindings.clone(),
        });
        self.screen = Screen::Game;
        self.last_error = None;
        info!("game started, player keys bound");
    }

    pub fn leave_game(&mut self) {
        if self.game.take().is_some() {
            info!("game left, player keys unbound");
        }
        self.screen = Screen::Menu;
    }

    pub fn handle_key(&mut self, code: KeyCode, now: Instant) {
        match self.screen {
            Screen::Menu => match code {
                KeyCode::Enter | KeyCode::Char(' ') => self.start_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Game => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => self.leave_game(),
                KeyCode::Char('r') => {
                    let over = self.view().is_some_and(|v| v.match_over);
                    if over {
                        self.dispatch(Command::Restart, now);
                    }
                }
                other => {
                    let command = self.game.as_ref().and_then(|g| g.keys.translate(other));
                    if let Some(command) = command {
                        self.dispatch(command, now);
                    }
                }
            },
        }
    }

    fn dispatch(&mut self, command: Command, now: Instant) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        match game.session.handle(command, now) {
            Ok(_) => self.last_error = None,
            Err(e) => {
                warn!("rejected {:?}: {}", command, e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Drive the deferred round reset; returns whether a redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.game.as_mut().is_some_and(|g| g.session.tick(now))
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        self.game
            .as_ref()
            .and_then(|g| g.session.next_deadline())
            .map(|deadline| deadline.saturating_duration_since(now).min(tick_rate))
            .unwrap_or(tick_rate)
    }
}
