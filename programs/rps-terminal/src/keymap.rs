//! Shared-keyboard bindings: three keys per player

use crossterm::event::KeyCode;
use rps_logic::{Command, Player, CATALOG_SIZE};

/// Physical keys for each player's moves, in catalog order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub player1: [KeyCode; CATALOG_SIZE],
    pub player2: [KeyCode; CATALOG_SIZE],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player1: [KeyCode::Char('a'), KeyCode::Char('s'), KeyCode::Char('d')],
            player2: [KeyCode::Left, KeyCode::Down, KeyCode::Right],
        }
    }
}

impl KeyBindings {
    fn keys(&self, player: Player) -> &[KeyCode; CATALOG_SIZE] {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    /// Map a key press to a move selection
    ///
    /// Letters match regardless of case so caps lock does not lock a player out.
    pub fn translate(&self, code: KeyCode) -> Option<Command> {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Player::ALL.into_iter().find_map(|player| {
            self.keys(player)
                .iter()
                .position(|key| *key == code)
                .map(|index| Command::Select { player, index })
        })
    }

    /// Label shown next to a move, e.g. `A` or `←`
    pub fn hint(&self, player: Player, index: usize) -> String {
        match self.keys(player).get(index) {
            Some(KeyCode::Char(c)) => c.to_ascii_uppercase().to_string(),
            Some(KeyCode::Left) => "←".to_string(),
            Some(KeyCode::Down) => "↓".to_string(),
            Some(KeyCode::Right) => "→".to_string(),
            Some(KeyCode::Up) => "↑".to_string(),
            Some(other) => format!("{:?}", other),
            None => String::new(),
        }
    }
}
