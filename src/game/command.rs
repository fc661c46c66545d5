//! Player commands.

use crate::game::Direction;

/// A command issued by the player for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Step one tile in a direction.
    Move(Direction),
    /// Place a bomb on the player's tile.
    PlaceBomb,
    /// Do nothing this turn.
    Wait,
    /// Unrecognized input; resolved like [`Command::Wait`] with an advisory event.
    Unknown(String),
}

impl Command {
    /// Parse a textual command (case-insensitive, surrounding whitespace ignored).
    ///
    /// The first word picks the command and `move` reads its direction from the
    /// second; any further words are ignored. Never fails: anything unrecognized
    /// becomes [`Command::Unknown`] carrying the trimmed, lowercased input.
    ///
    /// # Examples
    ///
    /// ```
    /// use blastgrid::game::{Command, Direction};
    ///
    /// assert_eq!(Command::parse("Move Left"), Command::Move(Direction::Left));
    /// assert_eq!(Command::parse("place"), Command::PlaceBomb);
    /// assert_eq!(Command::parse("  wait 3 "), Command::Wait);
    /// assert_eq!(Command::parse("Jump"), Command::Unknown("jump".to_string()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let lowered = input.trim().to_lowercase();
        let mut words = lowered.split_whitespace();

        let command = match words.next() {
            Some("move") => words.next().and_then(Direction::from_str).map(Command::Move),
            Some("bomb" | "place") => Some(Command::PlaceBomb),
            Some("wait") => Some(Command::Wait),
            _ => None,
        };

        command.unwrap_or(Command::Unknown(lowered))
    }

    /// Canonical text form, accepted back by [`Command::parse`].
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Command::Move(dir) => format!("move {}", dir.as_str()),
            Command::PlaceBomb => "bomb".to_string(),
            Command::Wait => "wait".to_string(),
            Command::Unknown(input) => input.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(Command::parse("move up"), Command::Move(Direction::Up));
        assert_eq!(Command::parse("MOVE DOWN"), Command::Move(Direction::Down));
        assert_eq!(Command::parse("move   right"), Command::Move(Direction::Right));
        assert_eq!(Command::parse("move left"), Command::Move(Direction::Left));
    }

    #[test]
    fn test_parse_bomb_aliases() {
        assert_eq!(Command::parse("bomb"), Command::PlaceBomb);
        assert_eq!(Command::parse("Place"), Command::PlaceBomb);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse("move"), Command::Unknown("move".to_string()));
        assert_eq!(
            Command::parse("move north"),
            Command::Unknown("move north".to_string())
        );
        assert_eq!(
            Command::parse("Fly Away"),
            Command::Unknown("fly away".to_string())
        );
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }

    #[test]
    fn test_parse_ignores_trailing_words() {
        assert_eq!(Command::parse("wait 3"), Command::Wait);
        assert_eq!(Command::parse("bomb now"), Command::PlaceBomb);
        assert_eq!(Command::parse("move up x"), Command::Move(Direction::Up));
        assert_eq!(
            Command::parse("move north up"),
            Command::Unknown("move north up".to_string())
        );
    }

    #[test]
    fn test_text_round_trip() {
        for command in [
            Command::Move(Direction::Up),
            Command::PlaceBomb,
            Command::Wait,
        ] {
            assert_eq!(Command::parse(&command.to_text()), command);
        }
    }
}
