#![no_main]

//! Full turn fuzzer.
//!
//! This fuzz target drives the resolver through arbitrary command sequences on
//! the built-in board with arbitrary rules and seeds:
//! 1. Player action (valid, blocked and unknown commands alike)
//! 2. Bomb decay and detonation
//! 3. Enemy movement
//! 4. Collisions, pickups and win/lose
//!
//! Invariants are checked after every turn.

use arbitrary::Arbitrary;
use blastgrid::game::{
    check_invariants, resolve_turn, Command, Direction, GameStatus, PlayerStats, Rules,
    SeededRandom,
};
use blastgrid::Layout;
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated command.
#[derive(Arbitrary, Debug, Clone)]
enum FuzzCommand {
    /// Step in one of the four directions.
    Move(u8),
    /// Place a bomb.
    Bomb,
    /// Skip the turn.
    Wait,
    /// Arbitrary text.
    Text(String),
}

/// Structured input for turn fuzzing.
#[derive(Arbitrary, Debug)]
struct TurnInput {
    /// Bomb timer (kept small).
    bomb_timer: u8,
    /// Starting blast radius.
    fire_power: u8,
    /// Starting bomb capacity.
    max_bombs: u8,
    /// Item drop chance, scaled from 0..=255.
    drop_chance: u8,
    /// RNG seed.
    rng_seed: u64,
    /// Commands, one per turn.
    commands: Vec<FuzzCommand>,
}

fuzz_target!(|input: TurnInput| {
    let rules = Rules {
        bomb_timer: u32::from(input.bomb_timer % 6).max(1),
        item_drop_chance: f64::from(input.drop_chance) / 255.0,
        starting_stats: PlayerStats {
            fire_power: u32::from(input.fire_power % 12).max(1),
            max_bombs: u32::from(input.max_bombs % 6).max(1),
        },
        ..Rules::default()
    };

    let mut state = Layout::builtin().new_game(&rules);
    state.status = GameStatus::Playing;
    let mut rng = SeededRandom::new(input.rng_seed);

    for (turn, cmd) in input.commands.iter().take(200).enumerate() {
        let command = match cmd {
            FuzzCommand::Move(d) => Command::Move(Direction::ALL[usize::from(*d) % 4]),
            FuzzCommand::Bomb => Command::PlaceBomb,
            FuzzCommand::Wait => Command::Wait,
            FuzzCommand::Text(s) => Command::parse(s),
        };

        let was_playing = state.status == GameStatus::Playing;
        let before_turn = state.turn;
        let outcome = resolve_turn(state, &command, &rules, &mut rng);

        // Verify invariants after each turn
        let violations = check_invariants(&outcome.state);
        assert!(
            violations.is_empty(),
            "Invariants violated after turn {}: {:?}",
            turn,
            violations
        );

        if was_playing {
            assert_eq!(outcome.state.turn, before_turn + 1);
        } else {
            assert!(outcome.events.is_empty());
        }

        state = outcome.state;
    }
});
