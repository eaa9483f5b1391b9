//! Key-to-command mapping for the terminal front end
//!
//! Vim-style keys (`h`, `j`, `k`, `l`) and `wasd` both move; `q` quits.
//! Keys are matched case-insensitively and anything else is ignored.

use crate::board::line::Direction;

/// A player instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the grid in a direction
    Move(Direction),
    /// End the session
    Quit,
}

impl Command {
    /// Command bound to a key, `None` for unbound keys
    pub const fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'h' | 'a' => Some(Self::Move(Direction::Left)),
            'l' | 'd' => Some(Self::Move(Direction::Right)),
            'k' | 'w' => Some(Self::Move(Direction::Up)),
            'j' | 's' => Some(Self::Move(Direction::Down)),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Commands of one input line in typing order
pub fn parse_commands(line: &str) -> impl Iterator<Item = Command> + '_ {
    line.chars().filter_map(|key| {
        let command = Command::from_key(key);
        if command.is_none() && !key.is_whitespace() {
            log::debug!("Ignoring unbound key {key:?}");
        }
        command
    })
}
