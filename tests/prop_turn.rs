//! Property-based tests for turn resolution.
//!
//! These tests drive the resolver with random command sequences and seeds and
//! check the rules that must hold for every turn.
//! Run with: cargo test --release prop_turn

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use blastgrid::game::{
    check_invariants, resolve_turn, Bomb, Cell, Command, Coord, Direction, GameState,
    GameStatus, PlayerStats, Rules, SeededRandom, TurnEvent,
};
use blastgrid::{ActionError, IllegalAction, Layout};

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => prop::sample::select(Direction::ALL.to_vec()).prop_map(Command::Move),
        2 => Just(Command::PlaceBomb),
        2 => Just(Command::Wait),
        1 => "[a-z ]{0,8}".prop_map(|s| Command::parse(&s)),
    ]
}

fn any_rules() -> impl Strategy<Value = Rules> {
    (1u32..5, 0.0f64..=1.0, 1u32..4, 1u32..4).prop_map(|(timer, drop, fire, bombs)| {
        let mut rules = Rules {
            bomb_timer: timer,
            item_drop_chance: drop,
            ..Rules::default()
        };
        rules.starting_stats.fire_power = fire;
        rules.starting_stats.max_bombs = bombs;
        rules
    })
}

fn playing(rules: &Rules) -> GameState {
    let mut state = Layout::builtin().new_game(rules);
    state.status = GameStatus::Playing;
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Random games never break structural invariants, and each playing turn
    /// advances the counter by exactly one.
    #[test]
    fn prop_invariants_hold(
        commands in prop::collection::vec(any_command(), 1..60),
        rules in any_rules(),
        seed in any::<u64>()
    ) {
        let mut rng = SeededRandom::new(seed);
        let mut state = playing(&rules);

        for command in &commands {
            let before = state.clone();
            let outcome = resolve_turn(state, command, &rules, &mut rng);

            if before.status == GameStatus::Playing {
                prop_assert_eq!(outcome.state.turn, before.turn + 1);
            } else {
                prop_assert_eq!(&outcome.state, &before);
                prop_assert!(outcome.events.is_empty());
            }

            let violations = check_invariants(&outcome.state);
            prop_assert!(violations.is_empty(), "{:?}", violations);
            prop_assert!(outcome.state.live_bomb_count() <= outcome.state.stats.max_bombs);

            state = outcome.state;
        }
    }

    /// Finished or unstarted games are returned untouched.
    #[test]
    fn prop_not_playing_is_identity(
        command in any_command(),
        status in prop::sample::select(vec![GameStatus::StartScreen, GameStatus::Win, GameStatus::Lose]),
        seed in any::<u64>()
    ) {
        let rules = Rules::default();
        let mut state = playing(&rules);
        state.status = status;
        state.bombs.push(Bomb::new(state.player, 1));

        let outcome = resolve_turn(state.clone(), &command, &rules, &mut SeededRandom::new(seed));
        prop_assert_eq!(outcome.state, state);
        prop_assert!(outcome.events.is_empty());
    }

    /// Bumping into a block never moves the player.
    #[test]
    fn prop_blocked_move_keeps_position(
        x in 1i32..10,
        y in 1i32..8,
        direction in prop::sample::select(Direction::ALL.to_vec()),
        seed in any::<u64>()
    ) {
        let rules = Rules::default();
        let mut state = playing(&rules);
        let start = Coord::new(x, y);
        prop_assume!(state.grid.get(start).is_some_and(Cell::is_walkable));
        let target = start.step(direction, 1);
        prop_assume!(state.grid.get(target).is_some_and(Cell::is_block));
        state.player = start;
        state.enemies.clear();

        let outcome = resolve_turn(state, &Command::Move(direction), &rules, &mut SeededRandom::new(seed));
        prop_assert_eq!(outcome.state.player, start);
        let blocked = matches!(
            outcome.events.first(),
            Some(TurnEvent::Rejected(ActionError::IllegalAction(IllegalAction::Blocked { .. })))
        );
        prop_assert!(blocked);
    }

    /// At capacity, placing a bomb adds nothing and reports the limit.
    #[test]
    fn prop_bomb_capacity(max_bombs in 1u32..4, seed in any::<u64>()) {
        let rules = Rules::default();
        let mut state = playing(&rules);
        state.stats.max_bombs = max_bombs;
        let spots = [Coord::new(1, 2), Coord::new(1, 3), Coord::new(1, 4)];
        let count = usize::try_from(max_bombs).unwrap();
        for &spot in spots.iter().take(count) {
            state.bombs.push(Bomb::new(spot, 10));
        }

        let outcome = resolve_turn(state, &Command::PlaceBomb, &rules, &mut SeededRandom::new(seed));
        prop_assert_eq!(outcome.state.bombs.len(), count);
        prop_assert!(outcome.state.bomb_at(Coord::new(2, 1)).is_none());
        prop_assert_eq!(
            outcome.events.first().map(ToString::to_string),
            Some("You can't place any more bombs!".to_string())
        );
    }

    /// A second bomb is never stacked on a tile that already has one.
    #[test]
    fn prop_no_stacked_bombs(timer in 2u32..10, seed in any::<u64>()) {
        let rules = Rules::default();
        let mut state = playing(&rules);
        state.stats.max_bombs = 3;
        state.bombs.push(Bomb::new(state.player, timer));

        let outcome = resolve_turn(state, &Command::PlaceBomb, &rules, &mut SeededRandom::new(seed));
        prop_assert_eq!(outcome.state.bombs, vec![Bomb::new(Coord::new(2, 1), timer - 1)]);
    }

    /// Timers drop by exactly one per turn; a bomb leaving the board burns its tile.
    #[test]
    fn prop_timers_decay_by_one(
        commands in prop::collection::vec(any_command(), 1..30),
        seed in any::<u64>()
    ) {
        let rules = Rules {
            starting_stats: PlayerStats { fire_power: 2, max_bombs: 3 },
            ..Rules::default()
        };
        let mut rng = SeededRandom::new(seed);
        let mut state = playing(&rules);

        for command in &commands {
            if state.status != GameStatus::Playing {
                break;
            }
            let before = state.bombs.clone();
            let outcome = resolve_turn(state, command, &rules, &mut rng);

            for bomb in &before {
                if bomb.timer > 1 {
                    prop_assert!(outcome.state.bombs.contains(&Bomb::new(bomb.pos, bomb.timer - 1)));
                } else {
                    prop_assert!(outcome.state.bomb_at(bomb.pos).is_none());
                    prop_assert!(outcome.state.is_exploding(bomb.pos));
                }
            }
            state = outcome.state;
        }
    }

    /// With no bombs and no enemies, waiting only advances the turn.
    #[test]
    fn prop_quiet_wait(turns in 1usize..20, seed in any::<u64>()) {
        let rules = Rules::default();
        let mut state = playing(&rules);
        state.enemies.clear();
        state.explosions.push(Coord::new(1, 1));
        let mut rng = SeededRandom::new(seed);

        for _ in 0..turns {
            let before = state.clone();
            let outcome = resolve_turn(state, &Command::Wait, &rules, &mut rng);
            prop_assert!(outcome.events.is_empty());
            prop_assert!(outcome.state.explosions.is_empty());

            let mut expected = before;
            expected.turn += 1;
            expected.explosions.clear();
            prop_assert_eq!(&outcome.state, &expected);
            state = outcome.state;
        }
    }
}
