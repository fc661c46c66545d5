//! Game invariants - sanity checks that detect bugs.
//!
//! The turn resolver should never produce a snapshot that trips one of these.
//! If it does, it indicates a bug in the resolver, not a gameplay situation.

use crate::game::{Cell, Coord, GameState};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

fn violation(message: String) -> InvariantViolation {
    InvariantViolation { message }
}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Player stands on floor
    match state.grid.get(state.player) {
        Some(cell) if cell.is_walkable() => {}
        Some(cell) => violations.push(violation(format!(
            "Player at {} is inside {:?}",
            state.player, cell
        ))),
        None => violations.push(violation(format!("Player at {} is off grid", state.player))),
    }

    // Enemies: on grid, never inside blocks, unique ids
    let mut ids = Vec::with_capacity(state.enemies.len());
    for enemy in &state.enemies {
        check_open_tile(state, "Enemy", enemy.pos, &mut violations);
        if ids.contains(&enemy.id) {
            violations.push(violation(format!("Duplicate enemy id {}", enemy.id)));
        }
        ids.push(enemy.id);
    }

    // Bombs: on grid, one per tile, never a spent timer, within capacity
    let mut bomb_tiles: Vec<Coord> = Vec::with_capacity(state.bombs.len());
    for bomb in &state.bombs {
        check_open_tile(state, "Bomb", bomb.pos, &mut violations);
        if bomb_tiles.contains(&bomb.pos) {
            violations.push(violation(format!("Two bombs at {}", bomb.pos)));
        }
        bomb_tiles.push(bomb.pos);
        if bomb.timer == 0 {
            violations.push(violation(format!(
                "Bomb at {} is still live with timer 0",
                bomb.pos
            )));
        }
    }
    if state.live_bomb_count() > state.stats.max_bombs {
        violations.push(violation(format!(
            "{} live bombs exceed max bombs {}",
            state.bombs.len(),
            state.stats.max_bombs
        )));
    }

    for item in &state.items {
        check_open_tile(state, "Item", item.pos, &mut violations);
    }

    for &tile in &state.explosions {
        if !state.grid.in_bounds(tile) {
            violations.push(violation(format!("Explosion at {tile} is off grid")));
        }
    }

    // Goal flag agrees with the grid
    match state.grid.get(state.goal) {
        Some(Cell::Goal) if !state.goal_visible => violations.push(violation(format!(
            "Goal at {} is on the grid but flagged hidden",
            state.goal
        ))),
        Some(cell) if cell != Cell::Goal && state.goal_visible => {
            violations.push(violation(format!(
                "Goal at {} is flagged visible but the tile is {:?}",
                state.goal, cell
            )));
        }
        None => violations.push(violation(format!("Goal at {} is off grid", state.goal))),
        Some(_) => {}
    }
    let goal_tiles = state.grid.count(Cell::Goal);
    if goal_tiles > 1 {
        violations.push(violation(format!("{goal_tiles} goal tiles on the grid")));
    }

    if state.stats.fire_power == 0 || state.stats.max_bombs == 0 {
        violations.push(violation(format!(
            "Player stats {:?} dropped below 1",
            state.stats
        )));
    }

    violations
}

fn check_open_tile(
    state: &GameState,
    what: &str,
    pos: Coord,
    violations: &mut Vec<InvariantViolation>,
) {
    match state.grid.get(pos) {
        None => violations.push(violation(format!("{what} at {pos} is off grid"))),
        Some(cell) if cell.is_block() => {
            violations.push(violation(format!("{what} at {pos} is inside {cell:?}")));
        }
        Some(_) => {}
    }
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
