//! Events emitted while resolving a turn.
//!
//! The presentation layer shows them as a message log; each event renders to the
//! message text through [`Display`](std::fmt::Display).

use std::fmt;

use crate::error::ActionError;
use crate::game::{Coord, EnemyId, ItemKind};

/// Something noteworthy that happened during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player's action was rejected.
    Rejected(ActionError),
    /// A blast destroyed the block covering the exit.
    GoalRevealed {
        /// Exit position.
        at: Coord,
    },
    /// A destroyed block dropped an item.
    ItemDropped {
        /// What dropped.
        kind: ItemKind,
        /// Where it dropped.
        at: Coord,
    },
    /// The player stood in a blast.
    PlayerCaughtInBlast,
    /// An enemy stood in a blast and was removed.
    EnemyDefeated {
        /// The defeated enemy.
        id: EnemyId,
    },
    /// An enemy ended the turn on the player's tile.
    PlayerCaughtByEnemy {
        /// The enemy that caught the player.
        id: EnemyId,
    },
    /// The player picked up an item.
    ItemCollected {
        /// What was picked up.
        kind: ItemKind,
    },
    /// The player reached the revealed exit.
    Escaped,
}

impl TurnEvent {
    /// Whether this event ends the game in a loss.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            TurnEvent::PlayerCaughtInBlast | TurnEvent::PlayerCaughtByEnemy { .. }
        )
    }
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::Rejected(err) => write!(f, "{err}"),
            TurnEvent::GoalRevealed { .. } => write!(f, "The exit has been revealed!"),
            TurnEvent::ItemDropped { kind, .. } => {
                write!(f, "A {} item appeared!", kind.label())
            }
            TurnEvent::PlayerCaughtInBlast => {
                write!(f, "You were caught in an explosion! Game Over.")
            }
            TurnEvent::EnemyDefeated { .. } => write!(f, "An enemy was defeated!"),
            TurnEvent::PlayerCaughtByEnemy { .. } => {
                write!(f, "You ran into an enemy! Game Over.")
            }
            TurnEvent::ItemCollected {
                kind: ItemKind::FireUp,
            } => write!(f, "Fire power increased!"),
            TurnEvent::ItemCollected {
                kind: ItemKind::BombUp,
            } => write!(f, "Max bombs increased!"),
            TurnEvent::Escaped => {
                write!(f, "Congratulations! You've found the exit and escaped!")
            }
        }
    }
}
