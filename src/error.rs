//! Error types for player actions.
//!
//! None of these are fatal: the turn resolver turns every rejected action into an
//! advisory event and carries on with the rest of the turn.

use std::fmt;

use crate::game::{Cell, Coord};

/// An action the rules do not allow right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalAction {
    /// The move target is a block.
    Blocked {
        /// Tile the player tried to enter.
        target: Coord,
        /// What is in the way.
        cell: Cell,
    },
    /// The player already has `max_bombs` bombs live.
    BombLimitReached {
        /// Current bomb capacity.
        max_bombs: u32,
    },
    /// A live bomb already sits on the player's tile.
    BombAlreadyPlaced {
        /// The occupied tile.
        at: Coord,
    },
}

/// Why a player action was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The input is not a recognized command.
    InvalidCommand {
        /// The raw input, as typed.
        input: String,
    },
    /// The command is recognized but not allowed in the current state.
    IllegalAction(IllegalAction),
    /// The action would leave the grid.
    OutOfBounds {
        /// The off-grid coordinate.
        target: Coord,
    },
}

impl fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalAction::Blocked { .. } => write!(f, "You can't move there!"),
            IllegalAction::BombLimitReached { .. } => {
                write!(f, "You can't place any more bombs!")
            }
            IllegalAction::BombAlreadyPlaced { .. } => {
                write!(f, "There is already a bomb here!")
            }
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InvalidCommand { input } => write!(f, "Unknown command: \"{input}\""),
            ActionError::IllegalAction(action) => write!(f, "{action}"),
            ActionError::OutOfBounds { .. } => write!(f, "You can't move off the map!"),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<IllegalAction> for ActionError {
    fn from(action: IllegalAction) -> Self {
        ActionError::IllegalAction(action)
    }
}

/// Result type for a single player action.
pub type ActionResult<T> = Result<T, ActionError>;
