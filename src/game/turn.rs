//! Turn resolution.
//!
//! A turn runs in a fixed order; later phases read what earlier ones left behind:
//!
//! 1. Player action (move or bomb placement)
//! 2. Bomb timer decay
//! 3. Detonation pass
//! 4. Enemy movement
//! 5. Collisions, item pickup, win/lose
//! 6. Turn counter

use log::{debug, trace};

use crate::error::{ActionError, ActionResult, IllegalAction};
use crate::game::{
    detonate, tick_bombs, Bomb, Cell, Command, Coord, Direction, GameState, GameStatus, Grid,
    Randomness, Rules, TurnEvent,
};

/// Result of resolving one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// The next snapshot.
    pub state: GameState,
    /// What happened, in phase order.
    pub events: Vec<TurnEvent>,
}

impl TurnOutcome {
    /// Event messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// Resolve one turn.
///
/// Consumes the snapshot and returns the next one. If the game is not being played
/// the snapshot comes back untouched with no events.
pub fn resolve_turn<R: Randomness + ?Sized>(
    mut state: GameState,
    command: &Command,
    rules: &Rules,
    rng: &mut R,
) -> TurnOutcome {
    if state.status != GameStatus::Playing {
        return TurnOutcome {
            state,
            events: Vec::new(),
        };
    }

    let mut events = Vec::new();

    if let Err(err) = apply_player_action(&mut state, command, rules) {
        debug!("turn {}: {command:?} rejected: {err}", state.turn);
        events.push(TurnEvent::Rejected(err));
    }

    tick_bombs(&mut state);
    detonate(&mut state, rules, rng, &mut events);
    move_enemies(&mut state, rng);
    resolve_collisions(&mut state, &mut events);

    state.turn = state.turn.saturating_add(1);
    debug!(
        "turn {} resolved: {} events, status {}",
        state.turn,
        events.len(),
        state.status.as_str()
    );

    TurnOutcome { state, events }
}

/// Apply the player's command for this turn.
///
/// # Errors
///
/// Returns the reason the action was rejected; the state is unchanged in that case.
pub fn apply_player_action(
    state: &mut GameState,
    command: &Command,
    rules: &Rules,
) -> ActionResult<()> {
    match command {
        Command::Move(direction) => move_player(state, *direction),
        Command::PlaceBomb => place_bomb(state, rules),
        Command::Wait => Ok(()),
        Command::Unknown(input) => Err(ActionError::InvalidCommand {
            input: input.clone(),
        }),
    }
}

fn move_player(state: &mut GameState, direction: Direction) -> ActionResult<()> {
    let target = state.player.step(direction, 1);
    match state.grid.get(target) {
        None => Err(ActionError::OutOfBounds { target }),
        Some(cell) if cell.is_walkable() => {
            state.player = target;
            Ok(())
        }
        Some(cell) => Err(IllegalAction::Blocked { target, cell }.into()),
    }
}

fn place_bomb(state: &mut GameState, rules: &Rules) -> ActionResult<()> {
    let at = state.player;
    if state.bomb_at(at).is_some() {
        return Err(IllegalAction::BombAlreadyPlaced { at }.into());
    }
    if state.live_bomb_count() >= state.stats.max_bombs {
        return Err(IllegalAction::BombLimitReached {
            max_bombs: state.stats.max_bombs,
        }
        .into());
    }

    state.bombs.push(Bomb::new(at, rules.bomb_timer));
    Ok(())
}

/// Open floor next to `pos`, in [`Direction::ALL`] order.
///
/// Returns a fixed-size array and count; only indices `0..count` are meaningful.
#[must_use]
pub fn open_neighbors(grid: &Grid, pos: Coord) -> ([Coord; 4], usize) {
    let mut result = [pos; 4];
    let mut count = 0;
    for next in pos.neighbors() {
        if grid.get(next) == Some(Cell::Empty) {
            result[count] = next;
            count += 1;
        }
    }
    (result, count)
}

/// Move every enemy one step to a random open neighbour, if it has one.
///
/// Enemies ignore bombs, fire, the player and each other.
pub fn move_enemies<R: Randomness + ?Sized>(state: &mut GameState, rng: &mut R) {
    let grid = &state.grid;
    for enemy in &mut state.enemies {
        let (open, count) = open_neighbors(grid, enemy.pos);
        if count > 0 {
            let next = open[rng.pick(count).min(count - 1)];
            trace!("enemy {} moves {} -> {next}", enemy.id, enemy.pos);
            enemy.pos = next;
        }
    }
}

/// Resolve blasts, enemy contact, item pickup and the win check, in that order.
///
/// A loss set here is never overwritten by the win check.
pub fn resolve_collisions(state: &mut GameState, events: &mut Vec<TurnEvent>) {
    let player = state.player;

    for &tile in &state.explosions {
        if tile == player {
            state.status = GameStatus::Lose;
            events.push(TurnEvent::PlayerCaughtInBlast);
        }
        state.enemies.retain(|enemy| {
            if enemy.pos == tile {
                events.push(TurnEvent::EnemyDefeated { id: enemy.id });
                false
            } else {
                true
            }
        });
    }

    for enemy in &state.enemies {
        if enemy.pos == player {
            state.status = GameStatus::Lose;
            events.push(TurnEvent::PlayerCaughtByEnemy { id: enemy.id });
        }
    }

    let stats = &mut state.stats;
    state.items.retain(|item| {
        if item.pos == player {
            stats.apply(item.kind);
            events.push(TurnEvent::ItemCollected { kind: item.kind });
            false
        } else {
            true
        }
    });

    if state.status != GameStatus::Lose && state.goal_visible && player == state.goal {
        state.status = GameStatus::Win;
        events.push(TurnEvent::Escaped);
    }
}
