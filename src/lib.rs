// Allow unwrap and float comparisons in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
//! Blastgrid: a deterministic, turn-based bomb game engine.
//!
//! This crate provides a single-player grid game where every command resolves
//! one complete turn:
//! - Bombs count down and blast in a cross, breaking blocks
//! - Enemies wander at random and end the game on contact
//! - Destroyed blocks reveal the exit and drop power-ups
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI / TUI (blastgrid binary)      │
//! ├─────────────────────────────────────┤
//! │   Session (lifecycle, messages)     │
//! ├─────────────────────────────────────┤
//! │   Turn resolver (game)              │
//! ├─────────────────────────────────────┤
//! │   Grid, entities, layout            │
//! └─────────────────────────────────────┘
//! ```
//!
//! The resolver is a pure function of the snapshot, the command, the rules and a
//! [`game::Randomness`] source, so a fixed seed replays the same game.

pub mod error;
pub mod game;
pub mod layout;
pub mod render;
pub mod session;

pub use error::{ActionError, ActionResult, IllegalAction};

// Re-export key game types at crate root for convenience
pub use game::{
    resolve_turn, Cell, Command, Coord, Direction, GameState, GameStatus, Grid, Rules,
    SeededRandom, TurnEvent, TurnOutcome,
};
pub use layout::{Layout, LayoutError};
pub use session::Session;
