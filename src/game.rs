//! Game layer for Blastgrid.
//!
//! Implements the rules of a single-player, turn-based bomb game:
//! - Grid with floor, breakable and unbreakable blocks, and a hidden exit
//! - Bombs with countdown timers and cross-shaped blasts
//! - Enemies wandering at random
//! - Power-up items dropped by destroyed blocks
//! - Turn resolver that advances one snapshot to the next

mod command;
mod entities;
mod events;
mod explosion;
pub mod invariants;
mod map;
mod random;
mod rules;
mod state;
mod turn;

pub use command::Command;
pub use entities::{Bomb, Enemy, EnemyId, Item, ItemKind, PlayerStats};
pub use events::TurnEvent;
pub use explosion::{detonate, tick_bombs};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use map::{Cell, Coord, Direction, Grid};
pub use random::{Randomness, ScriptedRandom, SeededRandom};
pub use rules::{Rules, DEFAULT_BOMB_TIMER, DEFAULT_FIRE_UP_SHARE, DEFAULT_ITEM_DROP_CHANCE};
pub use state::{GameState, GameStatus};
pub use turn::{
    apply_player_action, move_enemies, open_neighbors, resolve_collisions, resolve_turn,
    TurnOutcome,
};
