//! Tunable game rules.

use crate::game::PlayerStats;

/// Turns a freshly placed bomb waits before it goes off.
pub const DEFAULT_BOMB_TIMER: u32 = 3;

/// Chance that a destroyed breakable block drops an item.
pub const DEFAULT_ITEM_DROP_CHANCE: f64 = 0.3;

/// Chance that a dropped item is a Fire Up rather than a Bomb Up.
pub const DEFAULT_FIRE_UP_SHARE: f64 = 0.5;

/// Rules that stay fixed for a whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    /// Timer a freshly placed bomb starts with.
    pub bomb_timer: u32,
    /// Probability in `[0, 1]` that a destroyed block drops an item.
    pub item_drop_chance: f64,
    /// Probability in `[0, 1]` that a dropped item is [`ItemKind::FireUp`](crate::game::ItemKind::FireUp).
    pub fire_up_share: f64,
    /// Stats the player starts (and restarts) with.
    pub starting_stats: PlayerStats,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            bomb_timer: DEFAULT_BOMB_TIMER,
            item_drop_chance: DEFAULT_ITEM_DROP_CHANCE,
            fire_up_share: DEFAULT_FIRE_UP_SHARE,
            starting_stats: PlayerStats::default(),
        }
    }
}

impl Rules {
    /// Rules that never drop items; useful when a test needs a fully predictable board.
    #[must_use]
    pub fn without_items() -> Self {
        Self {
            item_drop_chance: 0.0,
            ..Self::default()
        }
    }
}
