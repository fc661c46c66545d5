//! ASCII renderer for terminal viewing, with optional ANSI colors.

use crate::game::{Cell, Coord, GameState, ItemKind};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const ORANGE: &str = "\x1b[91m";
const GRAY: &str = "\x1b[90m";

/// What a single tile shows, after layering entities over terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Tile is on fire.
    Explosion,
    /// The player.
    Player,
    /// An enemy.
    Enemy,
    /// A live bomb.
    Bomb,
    /// An item on the floor.
    Item(ItemKind),
    /// Bare terrain.
    Terrain(Cell),
}

impl Glyph {
    /// Single-character form.
    #[must_use]
    pub const fn char(self) -> char {
        match self {
            Glyph::Explosion => '*',
            Glyph::Player => 'P',
            Glyph::Enemy => 'E',
            Glyph::Bomb => 'o',
            Glyph::Item(ItemKind::FireUp) => 'F',
            Glyph::Item(ItemKind::BombUp) => '+',
            Glyph::Terrain(Cell::UnbreakableBlock) => '#',
            Glyph::Terrain(Cell::BreakableBlock) => '%',
            Glyph::Terrain(Cell::Goal) => 'G',
            Glyph::Terrain(Cell::Empty) => '.',
        }
    }

    const fn ansi(self) -> &'static str {
        match self {
            Glyph::Explosion => ORANGE,
            Glyph::Player => BLUE,
            Glyph::Enemy | Glyph::Item(ItemKind::FireUp) => RED,
            Glyph::Bomb | Glyph::Item(ItemKind::BombUp) | Glyph::Terrain(Cell::BreakableBlock) => {
                YELLOW
            }
            Glyph::Terrain(Cell::Goal) => GREEN,
            Glyph::Terrain(Cell::UnbreakableBlock | Cell::Empty) => GRAY,
        }
    }
}

/// Resolve what a tile shows.
///
/// Precedence: explosion, player, enemy, bomb, item, then terrain. Off-grid tiles
/// show as unbreakable.
#[must_use]
pub fn tile_glyph(state: &GameState, coord: Coord) -> Glyph {
    if state.is_exploding(coord) {
        Glyph::Explosion
    } else if state.player == coord {
        Glyph::Player
    } else if state.enemy_at(coord).is_some() {
        Glyph::Enemy
    } else if state.bomb_at(coord).is_some() {
        Glyph::Bomb
    } else if let Some(item) = state.item_at(coord) {
        Glyph::Item(item.kind)
    } else {
        Glyph::Terrain(state.cell(coord).unwrap_or(Cell::UnbreakableBlock))
    }
}

/// One-line status: turn, stats and lifecycle.
#[must_use]
pub fn status_line(state: &GameState) -> String {
    format!(
        "Turn {}  Fire {}  Bombs {}/{}  Status {}",
        state.turn,
        state.stats.fire_power,
        state.live_bomb_count(),
        state.stats.max_bombs,
        state.status.as_str()
    )
}

/// Render game state to ASCII.
///
/// Output format:
/// ```text
/// ###########
/// #.P.%.E.%.#
/// #.#.%.#.%.#
/// ...
/// ###########
/// Turn 0  Fire 1  Bombs 0/1  Status start
/// ```
#[must_use]
pub fn render_ascii(state: &GameState, color: bool) -> String {
    let width = i32::from(state.grid.width());
    let height = i32::from(state.grid.height());
    let mut output = String::new();

    for y in 0..height {
        for x in 0..width {
            let glyph = tile_glyph(state, Coord::new(x, y));
            if color {
                output.push_str(glyph.ansi());
                output.push(glyph.char());
                output.push_str(RESET);
            } else {
                output.push(glyph.char());
            }
        }
        output.push('\n');
    }

    if color {
        output.push_str(BOLD);
        output.push_str(&status_line(state));
        output.push_str(RESET);
    } else {
        output.push_str(&status_line(state));
    }
    output.push('\n');

    output
}

/// Legend for the glyphs used by [`render_ascii`].
pub const LEGEND: &str =
    "Legend: P=You  E=Enemy  o=Bomb  *=Fire  F=Fire Up  +=Bomb Up  #=Wall  %=Block  G=Exit";
