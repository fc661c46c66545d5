//! Initial board layouts.
//!
//! A layout is a block of equal-length rows, one character per tile:
//!
//! | Tag | Meaning |
//! |-----|---------|
//! | `X` | unbreakable block |
//! | `B` | breakable block |
//! | ` ` | floor |
//! | `P` | player start (exactly one) |
//! | `E` | enemy start |
//! | `G` | exit, hidden under a breakable block (exactly one) |
//!
//! A layout file may also list `item <x> <y> <fire|bomb>` lines. They are kept on
//! the [`Layout`] for reporting only; blasts never consult them.

use std::fmt;

use crate::game::{Cell, Coord, Enemy, GameState, Grid, Item, ItemKind, Rules};

/// The built-in 11x9 board.
pub const DEFAULT_LAYOUT: [&str; 9] = [
    "XXXXXXXXXXX",
    "X P B E B X",
    "X X B X B X",
    "X B B B B X",
    "X B X E X X",
    "X B B B B X",
    "X X B X B X",
    "X B E B G X",
    "XXXXXXXXXXX",
];

/// Item table shipped with the built-in board.
pub const DEFAULT_ITEM_TABLE: [(i32, i32, ItemKind); 2] =
    [(3, 1, ItemKind::FireUp), (1, 3, ItemKind::BombUp)];

/// Errors from parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No tile rows at all.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },
    /// A character that is not a layout tag.
    UnknownTag {
        /// The offending character.
        tag: char,
        /// Where it appears.
        at: Coord,
    },
    /// No `P` tile.
    MissingPlayer,
    /// More than one `P` tile.
    DuplicatePlayer {
        /// The second player tile.
        at: Coord,
    },
    /// No `G` tile.
    MissingGoal,
    /// More than one `G` tile.
    DuplicateGoal {
        /// The second goal tile.
        at: Coord,
    },
    /// The board does not fit the grid's dimensions.
    TooLarge {
        /// Row length.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// A malformed or out-of-bounds `item` line.
    InvalidItem {
        /// One-based line number in the source text.
        line: usize,
        /// The line as written.
        text: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout has no rows"),
            LayoutError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} tiles, expected {expected} like the first row"
            ),
            LayoutError::UnknownTag { tag, at } => {
                write!(f, "unknown tile tag {tag:?} at {at}")
            }
            LayoutError::MissingPlayer => write!(f, "layout has no player start 'P'"),
            LayoutError::DuplicatePlayer { at } => {
                write!(f, "second player start at {at}")
            }
            LayoutError::MissingGoal => write!(f, "layout has no goal 'G'"),
            LayoutError::DuplicateGoal { at } => write!(f, "second goal at {at}"),
            LayoutError::TooLarge { width, height } => {
                write!(f, "layout {width}x{height} is too large")
            }
            LayoutError::InvalidItem { line, text } => {
                write!(f, "line {line}: invalid item entry {text:?}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A parsed starting board.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Terrain, with the goal still covered.
    pub grid: Grid,
    /// Player start.
    pub player: Coord,
    /// Enemy starts, in row-major order.
    pub enemies: Vec<Coord>,
    /// Hidden exit.
    pub goal: Coord,
    /// Supplementary item table. Not wired to detonation.
    pub item_table: Vec<Item>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Layout {
    /// The built-in board with its item table.
    ///
    /// # Panics
    ///
    /// Panics if [`DEFAULT_LAYOUT`] itself is malformed.
    #[must_use]
    pub fn builtin() -> Self {
        let items = DEFAULT_ITEM_TABLE
            .iter()
            .map(|(x, y, kind)| format!("item {x} {y} {}", kind.as_str()));
        let lines: Vec<String> = DEFAULT_LAYOUT
            .iter()
            .map(|row| (*row).to_string())
            .chain(items)
            .collect();
        match Self::parse(&lines.join("\n")) {
            Ok(layout) => layout,
            Err(err) => unreachable!("built-in layout is valid: {err}"),
        }
    }

    /// Parse layout text.
    ///
    /// Lines starting with `item ` are item-table entries; every other non-empty
    /// line is a tile row. Only a trailing `\r` is stripped from rows, since spaces
    /// are floor tiles.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] describing the first problem found.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut player = None;
        let mut goal = None;
        let mut enemies = Vec::new();
        let mut item_lines = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            if line.starts_with("item ") {
                item_lines.push((line_no + 1, line));
                continue;
            }

            let y = rows.len();
            let row_y = i32::try_from(y).map_err(|_| LayoutError::TooLarge {
                width: line.chars().count(),
                height: y,
            })?;
            let mut row = Vec::with_capacity(line.len());
            for (x, tag) in line.chars().enumerate() {
                let at = Coord::new(i32::try_from(x).unwrap_or(i32::MAX), row_y);
                let cell = match tag {
                    'X' => Cell::UnbreakableBlock,
                    'B' => Cell::BreakableBlock,
                    ' ' => Cell::Empty,
                    'P' => {
                        if player.replace(at).is_some() {
                            return Err(LayoutError::DuplicatePlayer { at });
                        }
                        Cell::Empty
                    }
                    'E' => {
                        enemies.push(at);
                        Cell::Empty
                    }
                    'G' => {
                        if goal.replace(at).is_some() {
                            return Err(LayoutError::DuplicateGoal { at });
                        }
                        Cell::BreakableBlock
                    }
                    _ => return Err(LayoutError::UnknownTag { tag, at }),
                };
                row.push(cell);
            }

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LayoutError::RaggedRow {
                        row: y,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LayoutError::Empty);
        }
        let grid = Grid::from_rows(&rows).ok_or(LayoutError::TooLarge {
            width,
            height: rows.len(),
        })?;
        let player = player.ok_or(LayoutError::MissingPlayer)?;
        let goal = goal.ok_or(LayoutError::MissingGoal)?;

        let item_table = item_lines
            .into_iter()
            .map(|(line, text)| parse_item(&grid, line, text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            grid,
            player,
            enemies,
            goal,
            item_table,
        })
    }

    /// Build the opening snapshot: status `StartScreen`, turn 0, stats from `rules`.
    #[must_use]
    pub fn new_game(&self, rules: &Rules) -> GameState {
        let enemies = self
            .enemies
            .iter()
            .zip(0..)
            .map(|(&pos, id)| Enemy::new(id, pos))
            .collect();
        GameState::new(
            self.grid.clone(),
            self.player,
            enemies,
            self.goal,
            rules.starting_stats,
        )
    }

    /// Number of breakable blocks, counting the one over the goal.
    #[must_use]
    pub fn breakable_count(&self) -> usize {
        self.grid.count(Cell::BreakableBlock)
    }
}

fn parse_item(grid: &Grid, line: usize, text: &str) -> Result<Item, LayoutError> {
    let invalid = || LayoutError::InvalidItem {
        line,
        text: text.to_string(),
    };

    let mut words = text.split_whitespace().skip(1);
    let (Some(x), Some(y), Some(kind), None) =
        (words.next(), words.next(), words.next(), words.next())
    else {
        return Err(invalid());
    };

    let x: i32 = x.parse().map_err(|_| invalid())?;
    let y: i32 = y.parse().map_err(|_| invalid())?;
    let kind = ItemKind::from_str(kind).ok_or_else(invalid)?;
    let pos = Coord::new(x, y);
    if !grid.in_bounds(pos) {
        return Err(invalid());
    }
    Ok(Item::new(pos, kind))
}
