//! Grid, coordinate and cell types.

/// A coordinate on the grid.
///
/// Signed so that stepping off any edge yields a coordinate that simply
/// has no cell, instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate `steps` tiles away in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// The four orthogonal neighbours, in [`Direction::ALL`] order.
    ///
    /// Neighbours may lie off the grid; callers filter through [`Grid::get`].
    #[must_use]
    #[inline]
    pub const fn neighbors(self) -> [Coord; 4] {
        [
            self.step(Direction::Down, 1),
            self.step(Direction::Up, 1),
            self.step(Direction::Right, 1),
            self.step(Direction::Left, 1),
        ]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four axis directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Every direction, in the order blasts and enemies enumerate them.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// `(dx, dy)` for one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a direction (case-insensitive): "up", "down", "left" or "right".
    ///
    /// # Examples
    ///
    /// ```
    /// use blastgrid::game::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Lowercase name, as accepted by [`Direction::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Terrain of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Open floor.
    Empty,
    /// Block destroyed by the first blast that reaches it.
    BreakableBlock,
    /// Wall; stops blasts and movement.
    UnbreakableBlock,
    /// The revealed exit.
    Goal,
}

impl Cell {
    /// Whether the player may step onto this cell.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Goal)
    }

    /// Whether this cell is a block of either kind.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(self, Cell::BreakableBlock | Cell::UnbreakableBlock)
    }

    /// Layout tag for this cell.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::BreakableBlock => 'B',
            Cell::UnbreakableBlock => 'X',
            Cell::Goal => 'G',
        }
    }
}

/// The fixed-size tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in tiles.
    width: u16,
    /// Height in tiles.
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled with `fill`.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16, fill: Cell) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        Some(Self {
            width,
            height,
            cells: vec![fill; size],
        })
    }

    /// Build a grid from rows of cells.
    ///
    /// Returns `None` if there are no rows, a row is empty, or rows differ in length.
    #[must_use]
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let first = rows.first()?;
        let width = u16::try_from(first.len()).ok()?;
        let height = u16::try_from(rows.len()).ok()?;
        if width == 0 || rows.iter().any(|row| row.len() != first.len()) {
            return None;
        }

        Some(Self {
            width,
            height,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is on the grid.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < i32::from(self.width)
            && coord.y < i32::from(self.height)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        Some(y * usize::from(self.width) + x)
    }

    /// The cell at `coord`, or `None` off the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at `coord`.
    ///
    /// Returns `false` if the coordinate is off the grid.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if let Some(idx) = self.index(coord) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Iterate over all coordinates and cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = usize::from(self.width);
        self.cells.iter().enumerate().map(move |(idx, cell)| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let coord = Coord::new((idx % width) as i32, (idx / width) as i32);
            (coord, *cell)
        })
    }

    /// Iterate over rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width))
    }

    /// Count cells of a given kind.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }
}
