//! Entities that live on top of the grid.

use crate::game::Coord;

/// Unique identifier for an enemy.
pub type EnemyId = u32;

/// A wandering enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    /// Unique identifier, assigned at layout parse time.
    pub id: EnemyId,
    /// Current position.
    pub pos: Coord,
}

impl Enemy {
    /// Create a new enemy.
    #[must_use]
    pub const fn new(id: EnemyId, pos: Coord) -> Self {
        Self { id, pos }
    }
}

/// A live bomb counting down to detonation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bomb {
    /// Tile the bomb sits on.
    pub pos: Coord,
    /// Turns of decay left before detonation.
    pub timer: u32,
}

impl Bomb {
    /// Create a new bomb.
    #[must_use]
    pub const fn new(pos: Coord, timer: u32) -> Self {
        Self { pos, timer }
    }

    /// Decay the timer by one turn.
    pub fn tick(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }

    /// Whether the timer has run out.
    #[must_use]
    pub const fn is_due(&self) -> bool {
        self.timer == 0
    }
}

/// Kind of power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Increases blast radius by one tile.
    FireUp,
    /// Increases the number of bombs that may be live at once.
    BombUp,
}

impl ItemKind {
    /// Parse an item kind (case-insensitive): "fire" or "bomb".
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fire" | "fireup" => Some(ItemKind::FireUp),
            "bomb" | "bombup" => Some(ItemKind::BombUp),
            _ => None,
        }
    }

    /// Short lowercase name, as accepted by [`ItemKind::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemKind::FireUp => "fire",
            ItemKind::BombUp => "bomb",
        }
    }

    /// Display name used in event messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ItemKind::FireUp => "Fire Up",
            ItemKind::BombUp => "Bomb Up",
        }
    }
}

/// A power-up lying on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Tile the item lies on.
    pub pos: Coord,
    /// What the item does when picked up.
    pub kind: ItemKind,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub const fn new(pos: Coord, kind: ItemKind) -> Self {
        Self { pos, kind }
    }
}

/// Player power levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    /// Blast radius in tiles per direction.
    pub fire_power: u32,
    /// Number of bombs that may be live at once.
    pub max_bombs: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            fire_power: 1,
            max_bombs: 1,
        }
    }
}

impl PlayerStats {
    /// Apply the effect of picking up an item.
    pub fn apply(&mut self, kind: ItemKind) {
        match kind {
            ItemKind::FireUp => self.fire_power = self.fire_power.saturating_add(1),
            ItemKind::BombUp => self.max_bombs = self.max_bombs.saturating_add(1),
        }
    }
}
