//! Game session: lifecycle commands, message log and explosion display.
//!
//! The session is the only stateful layer. It turns raw input into either a
//! lifecycle transition (`start`, `restart`) or a resolved turn, and keeps the
//! message the player sees after each input.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::game::{
    assert_invariants, resolve_turn, Command, GameState, GameStatus, Randomness, Rules,
    SeededRandom,
};
use crate::layout::Layout;

/// How long explosions stay on screen after the turn that produced them.
pub const EXPLOSION_DISPLAY: Duration = Duration::from_millis(500);

/// Shown on the start screen.
pub const START_HINT: &str = "Type \"start\" to begin your adventure!";
/// Shown after `start`.
pub const STARTED: &str = "Game started! Use 'move [up/down/left/right]' or 'bomb'.";
/// Shown after `restart`.
pub const RESTARTED: &str = "Game restarted! Your move.";
/// Shown after a turn with no events.
pub const TURN_ENDED: &str = "Turn ended. Your move.";
/// Shown for input after the game is over.
pub const RESTART_HINT: &str = "Type \"restart\" to play again.";

/// A single player's game from start screen to win or loss, and any restarts.
#[derive(Debug)]
pub struct Session<R: Randomness = SeededRandom> {
    layout: Layout,
    rules: Rules,
    rng: R,
    state: GameState,
    messages: Vec<String>,
    explosion_deadline: Option<Instant>,
}

impl Session<SeededRandom> {
    /// Create a seeded session.
    #[must_use]
    pub fn seeded(layout: Layout, rules: Rules, seed: u64) -> Self {
        Self::new(layout, rules, SeededRandom::new(seed))
    }
}

impl<R: Randomness> Session<R> {
    /// Create a session on the start screen.
    #[must_use]
    pub fn new(layout: Layout, rules: Rules, rng: R) -> Self {
        let state = layout.new_game(&rules);
        Self {
            layout,
            rules,
            rng,
            state,
            messages: vec![START_HINT.to_string()],
            explosion_deadline: None,
        }
    }

    /// Current snapshot.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules in force.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The layout games start from.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Messages produced by the last input.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Messages produced by the last input, joined into one line.
    #[must_use]
    pub fn message(&self) -> String {
        self.messages.join(" ")
    }

    /// When the current explosions stop being displayed, if any are pending.
    #[must_use]
    pub const fn explosion_deadline(&self) -> Option<Instant> {
        self.explosion_deadline
    }

    /// Handle one line of player input, timing explosions from now.
    pub fn handle(&mut self, input: &str) -> &[String] {
        self.handle_at(input, Instant::now())
    }

    /// Handle one line of player input at a given instant.
    pub fn handle_at(&mut self, input: &str, now: Instant) -> &[String] {
        let token = input.trim().to_lowercase();

        self.messages = match (self.state.status, token.as_str()) {
            (GameStatus::StartScreen, "start") => {
                self.state.status = GameStatus::Playing;
                info!("game started");
                vec![STARTED.to_string()]
            }
            (_, "restart") => {
                self.restart();
                vec![RESTARTED.to_string()]
            }
            (GameStatus::Playing, _) => self.play_turn(input, now),
            (GameStatus::StartScreen, _) => vec![START_HINT.to_string()],
            (GameStatus::Win | GameStatus::Lose, _) => vec![RESTART_HINT.to_string()],
        };

        &self.messages
    }

    /// Drop the displayed explosions once their deadline has passed.
    ///
    /// Returns whether anything was cleared.
    pub fn clear_expired_explosions(&mut self, now: Instant) -> bool {
        match self.explosion_deadline {
            Some(deadline) if now >= deadline => {
                self.explosion_deadline = None;
                self.state.explosions.clear();
                true
            }
            _ => false,
        }
    }

    fn restart(&mut self) {
        self.state = self.layout.new_game(&self.rules);
        self.state.status = GameStatus::Playing;
        self.explosion_deadline = None;
        info!("game restarted");
    }

    fn play_turn(&mut self, input: &str, now: Instant) -> Vec<String> {
        let command = Command::parse(input);
        let outcome = resolve_turn(self.state.clone(), &command, &self.rules, &mut self.rng);
        self.state = outcome.state;
        assert_invariants(&self.state);

        self.explosion_deadline =
            if self.state.explosions.is_empty() || self.state.status != GameStatus::Playing {
                None
            } else {
                Some(now + EXPLOSION_DISPLAY)
            };

        match self.state.status {
            GameStatus::Win => info!("player escaped on turn {}", self.state.turn),
            GameStatus::Lose => info!("player lost on turn {}", self.state.turn),
            GameStatus::StartScreen | GameStatus::Playing => {}
        }

        let messages: Vec<String> = outcome.events.iter().map(ToString::to_string).collect();
        if messages.is_empty() {
            debug!("turn {} was quiet", self.state.turn);
            vec![TURN_ENDED.to_string()]
        } else {
            messages
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Bomb, Coord, PlayerStats, ScriptedRandom};

    fn create_session() -> Session<ScriptedRandom> {
        Session::new(
            Layout::builtin(),
            Rules::without_items(),
            ScriptedRandom::default(),
        )
    }

    #[test]
    fn test_start_only_from_start_screen() {
        let mut session = create_session();
        assert_eq!(session.message(), START_HINT);

        assert_eq!(session.handle("wait"), [START_HINT.to_string()]);
        assert_eq!(session.state().status, GameStatus::StartScreen);

        assert_eq!(session.handle("  Start "), [STARTED.to_string()]);
        assert_eq!(session.state().status, GameStatus::Playing);
        assert_eq!(session.state().turn(), 0);

        // A second start is just an unknown command
        let messages = session.handle("start").to_vec();
        assert_eq!(messages, vec!["Unknown command: \"start\"".to_string()]);
        assert_eq!(session.state().turn(), 1);
    }

    #[test]
    fn test_quiet_turn_message() {
        let mut session = create_session();
        session.handle("start");
        // Player at (2, 1): the tile above is a wall.
        assert_eq!(
            session.handle("move up"),
            ["You can't move there!".to_string()]
        );
        session.handle("move left");
        assert_eq!(session.state().player, Coord::new(1, 1));

        let mut session = create_session();
        session.handle("start");
        session.state.enemies.clear();
        assert_eq!(session.handle("wait"), [TURN_ENDED.to_string()]);
    }

    #[test]
    fn test_restart_resets_board() {
        let mut session = create_session();
        session.handle("start");
        session.handle("move left");
        session.state.stats = PlayerStats {
            fire_power: 4,
            max_bombs: 2,
        };
        session.state.status = GameStatus::Lose;

        assert_eq!(session.handle("wait"), [RESTART_HINT.to_string()]);
        assert_eq!(session.handle("RESTART"), [RESTARTED.to_string()]);

        let state = session.state();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.turn(), 0);
        assert_eq!(state.stats, PlayerStats::default());
        assert_eq!(state.player, Coord::new(2, 1));
        assert_eq!(state.enemies.len(), 3);
    }

    #[test]
    fn test_restart_while_playing() {
        let mut session = create_session();
        session.handle("start");
        session.handle("move left");
        session.handle("restart");
        assert_eq!(session.state().turn(), 0);
        assert_eq!(session.state().status, GameStatus::Playing);
    }

    #[test]
    fn test_restart_from_start_screen_begins_game() {
        let mut session = create_session();
        assert_eq!(session.handle("restart"), [RESTARTED.to_string()]);
        assert_eq!(session.state().status, GameStatus::Playing);
        assert_eq!(session.state().turn(), 0);
        assert_eq!(session.state().player, Coord::new(2, 1));
    }

    #[test]
    fn test_explosion_deadline() {
        let mut session = create_session();
        session.handle("start");
        session.state.enemies.clear();
        // Out of the player's reach, about to go off.
        session.state.bombs.push(Bomb::new(Coord::new(1, 3), 1));

        let t0 = Instant::now();
        session.handle_at("wait", t0);
        assert_eq!(session.state().status, GameStatus::Playing);
        assert!(!session.state().explosions.is_empty());
        assert_eq!(session.explosion_deadline(), Some(t0 + EXPLOSION_DISPLAY));

        assert!(!session.clear_expired_explosions(t0 + Duration::from_millis(499)));
        assert!(!session.state().explosions.is_empty());

        assert!(session.clear_expired_explosions(t0 + EXPLOSION_DISPLAY));
        assert!(session.state().explosions.is_empty());
        assert_eq!(session.explosion_deadline(), None);
    }

    #[test]
    fn test_no_deadline_after_losing() {
        let mut session = create_session();
        session.handle("start");
        session.state.bombs.push(Bomb::new(Coord::new(2, 1), 1));

        session.handle_at("wait", Instant::now());
        assert_eq!(session.state().status, GameStatus::Lose);
        assert_eq!(session.explosion_deadline(), None);
        assert!(!session.state().explosions.is_empty());
    }

    #[test]
    fn test_seeded_sessions_replay() {
        let inputs = ["start", "bomb", "move left", "wait", "wait", "move right"];
        let mut a = Session::seeded(Layout::builtin(), Rules::default(), 99);
        let mut b = Session::seeded(Layout::builtin(), Rules::default(), 99);
        for input in inputs {
            assert_eq!(a.handle(input).to_vec(), b.handle(input).to_vec());
        }
        assert_eq!(a.state(), b.state());
    }
}
