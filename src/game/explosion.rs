//! Bomb detonation.
//!
//! All bombs whose timer reached zero go off together in a single pass. A blast
//! never sets off another bomb early: only the timer triggers a detonation.

use log::debug;

use crate::game::{
    Cell, Coord, Direction, GameState, Item, ItemKind, Randomness, Rules, TurnEvent,
};

/// Decay every live bomb's timer by one turn.
pub fn tick_bombs(state: &mut GameState) {
    for bomb in &mut state.bombs {
        bomb.tick();
    }
}

/// Detonate every bomb whose timer is zero.
///
/// Replaces the explosion set with the tiles burned in this pass and removes the
/// detonated bombs. Returns how many bombs went off.
pub fn detonate<R: Randomness + ?Sized>(
    state: &mut GameState,
    rules: &Rules,
    rng: &mut R,
    events: &mut Vec<TurnEvent>,
) -> usize {
    let due: Vec<Coord> = state
        .bombs
        .iter()
        .filter(|b| b.is_due())
        .map(|b| b.pos)
        .collect();

    let mut fire = Vec::new();
    for &origin in &due {
        mark(&mut fire, origin);
        for direction in Direction::ALL {
            blast_walk(state, origin, direction, rules, rng, &mut fire, events);
        }
        debug!("bomb at {origin} detonated");
    }

    state.explosions = fire;
    state.bombs.retain(|b| !b.is_due());
    due.len()
}

/// Walk outward from `origin` up to `fire_power` tiles.
///
/// Stops before a wall or the grid edge, and right after the first breakable block.
fn blast_walk<R: Randomness + ?Sized>(
    state: &mut GameState,
    origin: Coord,
    direction: Direction,
    rules: &Rules,
    rng: &mut R,
    fire: &mut Vec<Coord>,
    events: &mut Vec<TurnEvent>,
) {
    let reach = i32::try_from(state.stats.fire_power).unwrap_or(i32::MAX);

    for step in 1..=reach {
        let tile = origin.step(direction, step);
        match state.grid.get(tile) {
            None | Some(Cell::UnbreakableBlock) => break,
            Some(Cell::BreakableBlock) => {
                mark(fire, tile);
                destroy_block(state, tile, rules, rng, events);
                break;
            }
            Some(Cell::Empty | Cell::Goal) => mark(fire, tile),
        }
    }
}

/// Clear a breakable block, revealing the exit beneath it if there is one, and
/// maybe drop an item.
fn destroy_block<R: Randomness + ?Sized>(
    state: &mut GameState,
    tile: Coord,
    rules: &Rules,
    rng: &mut R,
    events: &mut Vec<TurnEvent>,
) {
    if tile == state.goal {
        state.grid.set(tile, Cell::Goal);
        state.goal_visible = true;
        events.push(TurnEvent::GoalRevealed { at: tile });
    } else {
        state.grid.set(tile, Cell::Empty);
    }

    if rng.roll() < rules.item_drop_chance {
        let kind = if rng.roll() < rules.fire_up_share {
            ItemKind::FireUp
        } else {
            ItemKind::BombUp
        };
        state.items.push(Item::new(tile, kind));
        events.push(TurnEvent::ItemDropped { kind, at: tile });
    }
}

fn mark(fire: &mut Vec<Coord>, tile: Coord) {
    if !fire.contains(&tile) {
        fire.push(tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Bomb, Grid, PlayerStats, ScriptedRandom};

    /// 7x7 open floor ringed by walls; goal hidden at (5, 3).
    fn create_test_game() -> GameState {
        let mut grid = Grid::new(7, 7, Cell::Empty).unwrap();
        for i in 0..7 {
            grid.set(Coord::new(i, 0), Cell::UnbreakableBlock);
            grid.set(Coord::new(i, 6), Cell::UnbreakableBlock);
            grid.set(Coord::new(0, i), Cell::UnbreakableBlock);
            grid.set(Coord::new(6, i), Cell::UnbreakableBlock);
        }
        grid.set(Coord::new(5, 3), Cell::BreakableBlock);
        GameState::new(
            grid,
            Coord::new(1, 1),
            Vec::new(),
            Coord::new(5, 3),
            PlayerStats::default(),
        )
    }

    fn run(state: &mut GameState) -> Vec<TurnEvent> {
        let mut events = Vec::new();
        detonate(state, &Rules::without_items(), &mut ScriptedRandom::default(), &mut events);
        events
    }

    #[test]
    fn test_only_due_bombs_detonate() {
        let mut game = create_test_game();
        game.bombs.push(Bomb::new(Coord::new(3, 3), 0));
        game.bombs.push(Bomb::new(Coord::new(2, 2), 2));

        run(&mut game);

        assert_eq!(game.bombs, vec![Bomb::new(Coord::new(2, 2), 2)]);
        assert_eq!(game.explosions.len(), 5);
        assert!(game.is_exploding(Coord::new(3, 3)));
        assert!(game.is_exploding(Coord::new(3, 2)));
        assert!(game.is_exploding(Coord::new(3, 4)));
        assert!(game.is_exploding(Coord::new(2, 3)));
        assert!(game.is_exploding(Coord::new(4, 3)));
    }

    #[test]
    fn test_wall_stops_blast_unmarked() {
        let mut game = create_test_game();
        game.stats.fire_power = 3;
        game.bombs.push(Bomb::new(Coord::new(1, 3), 0));

        run(&mut game);

        assert!(!game.is_exploding(Coord::new(0, 3)));
        assert!(game.is_exploding(Coord::new(1, 1)));
        assert!(game.is_exploding(Coord::new(1, 5)));
        assert!(!game.is_exploding(Coord::new(1, 6)));
    }

    #[test]
    fn test_breakable_block_stops_blast_and_reveals_goal() {
        let mut game = create_test_game();
        game.stats.fire_power = 4;
        game.bombs.push(Bomb::new(Coord::new(2, 3), 0));

        let events = run(&mut game);

        assert!(game.is_exploding(Coord::new(5, 3)));
        assert_eq!(game.grid.get(Coord::new(5, 3)), Some(Cell::Goal));
        assert!(game.goal_visible);
        assert_eq!(events, vec![TurnEvent::GoalRevealed { at: Coord::new(5, 3) }]);
    }

    #[test]
    fn test_block_broken_to_empty_when_not_goal() {
        let mut game = create_test_game();
        game.grid.set(Coord::new(3, 4), Cell::BreakableBlock);
        game.stats.fire_power = 3;
        game.bombs.push(Bomb::new(Coord::new(3, 3), 0));

        run(&mut game);

        assert_eq!(game.grid.get(Coord::new(3, 4)), Some(Cell::Empty));
        assert!(game.is_exploding(Coord::new(3, 4)));
        // Nothing past the broken block burns this pass.
        assert!(!game.is_exploding(Coord::new(3, 5)));
        assert!(!game.goal_visible);
    }

    #[test]
    fn test_simultaneous_bombs_union() {
        let mut game = create_test_game();
        game.bombs.push(Bomb::new(Coord::new(2, 2), 0));
        game.bombs.push(Bomb::new(Coord::new(3, 2), 0));

        let count = {
            let mut events = Vec::new();
            detonate(&mut game, &Rules::default(), &mut ScriptedRandom::default(), &mut events)
        };

        assert_eq!(count, 2);
        assert!(game.bombs.is_empty());
        // Overlapping tiles appear once.
        let mut tiles = game.explosions.clone();
        tiles.sort();
        tiles.dedup();
        assert_eq!(tiles.len(), game.explosions.len());
    }

    #[test]
    fn test_item_drop_roll() {
        let mut game = create_test_game();
        game.grid.set(Coord::new(3, 4), Cell::BreakableBlock);
        game.bombs.push(Bomb::new(Coord::new(3, 3), 0));

        // First roll passes the 0.3 drop check, second picks Bomb Up.
        let mut rng = ScriptedRandom::new([], [0.1, 0.9]);
        let mut events = Vec::new();
        detonate(&mut game, &Rules::default(), &mut rng, &mut events);

        assert_eq!(game.items, vec![Item::new(Coord::new(3, 4), ItemKind::BombUp)]);
        assert_eq!(
            events,
            vec![TurnEvent::ItemDropped {
                kind: ItemKind::BombUp,
                at: Coord::new(3, 4)
            }]
        );
    }

    #[test]
    fn test_no_bombs_clears_explosions() {
        let mut game = create_test_game();
        game.explosions.push(Coord::new(2, 2));

        assert_eq!(run(&mut game).len(), 0);
        assert!(game.explosions.is_empty());
    }

    #[test]
    fn test_blast_at_grid_edge_without_walls() {
        let grid = Grid::new(3, 1, Cell::Empty).unwrap();
        let mut game = GameState::new(
            grid,
            Coord::new(0, 0),
            Vec::new(),
            Coord::new(2, 0),
            PlayerStats {
                fire_power: 5,
                max_bombs: 1,
            },
        );
        game.bombs.push(Bomb::new(Coord::new(0, 0), 0));

        run(&mut game);

        let mut tiles = game.explosions.clone();
        tiles.sort();
        assert_eq!(
            tiles,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_tick_bombs() {
        let mut game = create_test_game();
        game.bombs.push(Bomb::new(Coord::new(2, 2), 3));
        game.bombs.push(Bomb::new(Coord::new(3, 3), 1));

        tick_bombs(&mut game);

        assert_eq!(game.bombs[0].timer, 2);
        assert_eq!(game.bombs[1].timer, 0);
    }
}
