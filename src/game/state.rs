//! Game state snapshot.

use crate::game::{Bomb, Cell, Coord, Enemy, Grid, Item, PlayerStats};

/// Lifecycle status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Waiting for the `start` command.
    StartScreen,
    /// Turns are being resolved.
    Playing,
    /// The player reached the revealed exit.
    Win,
    /// The player was caught by a blast or an enemy.
    Lose,
}

impl GameStatus {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Lose)
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::StartScreen => "start",
            GameStatus::Playing => "playing",
            GameStatus::Win => "win",
            GameStatus::Lose => "lose",
        }
    }
}

/// Complete game state between two turns.
///
/// Snapshots are plain values: the turn resolver consumes one and returns the next.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// The terrain.
    pub grid: Grid,
    /// Player position.
    pub player: Coord,
    /// Enemies still alive.
    pub enemies: Vec<Enemy>,
    /// Live bombs.
    pub bombs: Vec<Bomb>,
    /// Tiles on fire from this turn's detonation pass.
    pub explosions: Vec<Coord>,
    /// Items lying on the floor.
    pub items: Vec<Item>,
    /// Exit position.
    pub goal: Coord,
    /// Whether the block covering the exit has been destroyed.
    pub goal_visible: bool,
    /// Player power levels.
    pub stats: PlayerStats,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Number of turns resolved so far.
    pub turn: u32,
}

impl GameState {
    /// Create a fresh game on the start screen.
    ///
    /// The goal should already be covered by a breakable block in `grid`.
    #[must_use]
    pub fn new(
        grid: Grid,
        player: Coord,
        enemies: Vec<Enemy>,
        goal: Coord,
        stats: PlayerStats,
    ) -> Self {
        Self {
            grid,
            player,
            enemies,
            bombs: Vec::new(),
            explosions: Vec::new(),
            items: Vec::new(),
            goal,
            goal_visible: false,
            stats,
            status: GameStatus::StartScreen,
            turn: 0,
        }
    }

    /// Get the current turn number.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Whether turns are currently being resolved.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// The terrain at `coord`, or `None` off the grid.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.grid.get(coord)
    }

    /// The live bomb at `coord`, if any.
    #[must_use]
    pub fn bomb_at(&self, coord: Coord) -> Option<&Bomb> {
        self.bombs.iter().find(|b| b.pos == coord)
    }

    /// The first enemy at `coord`, if any.
    #[must_use]
    pub fn enemy_at(&self, coord: Coord) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.pos == coord)
    }

    /// The first item at `coord`, if any.
    #[must_use]
    pub fn item_at(&self, coord: Coord) -> Option<&Item> {
        self.items.iter().find(|i| i.pos == coord)
    }

    /// Whether `coord` is on fire.
    #[must_use]
    pub fn is_exploding(&self, coord: Coord) -> bool {
        self.explosions.contains(&coord)
    }

    /// Whether the player may place another bomb right now.
    #[must_use]
    pub fn can_place_bomb(&self) -> bool {
        self.bomb_at(self.player).is_none() && self.live_bomb_count() < self.stats.max_bombs
    }

    /// Number of live bombs.
    #[must_use]
    pub fn live_bomb_count(&self) -> u32 {
        u32::try_from(self.bombs.len()).unwrap_or(u32::MAX)
    }
}
