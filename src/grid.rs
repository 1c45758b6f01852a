//! Cell lattice and wall bookkeeping.
//!
//! The grid stores one `u8` wall bitmask per cell in a flat row-major
//! arena; cells are addressed by `(col, row)` coordinates rather than by
//! references to each other, so the visited sets used elsewhere are plain
//! `Vec<bool>` indexed the same way.
//!
//! Axis convention, applied uniformly to wall bits, bounds checks and
//! movement deltas: increasing `col` = right, increasing `row` = down.
//! `Up` faces decreasing `row`, `Left` faces decreasing `col`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MazeError;

// Wall bits per cell. 1=up, 2=right, 4=down, 8=left.
pub(crate) const W_UP: u8 = 1;
pub(crate) const W_RIGHT: u8 = 2;
pub(crate) const W_DOWN: u8 = 4;
pub(crate) const W_LEFT: u8 = 8;
pub(crate) const W_ALL: u8 = W_UP | W_RIGHT | W_DOWN | W_LEFT;

/// One grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// The four discrete move directions accepted from an input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn from_action_str(action: &str) -> Option<Self> {
        match action {
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Wall bit on a cell facing this direction.
    pub(crate) fn wall_bit(self) -> u8 {
        match self {
            Direction::Up => W_UP,
            Direction::Right => W_RIGHT,
            Direction::Down => W_DOWN,
            Direction::Left => W_LEFT,
        }
    }

    /// The cell one step away, or `None` if that would leave the
    /// `cols x rows` bounds.
    pub fn step(self, cell: Cell, cols: u32, rows: u32) -> Option<Cell> {
        match self {
            Direction::Up if cell.row > 0 => Some(Cell::new(cell.col, cell.row - 1)),
            Direction::Right if cell.col + 1 < cols => Some(Cell::new(cell.col + 1, cell.row)),
            Direction::Down if cell.row + 1 < rows => Some(Cell::new(cell.col, cell.row + 1)),
            Direction::Left if cell.col > 0 => Some(Cell::new(cell.col - 1, cell.row)),
            _ => None,
        }
    }

    /// Direction from `a` to `b` when they are exactly one step apart.
    pub(crate) fn between(a: Cell, b: Cell) -> Option<Self> {
        if a.col == b.col && b.row + 1 == a.row {
            Some(Direction::Up)
        } else if a.row == b.row && a.col + 1 == b.col {
            Some(Direction::Right)
        } else if a.col == b.col && a.row + 1 == b.row {
            Some(Direction::Down)
        } else if a.row == b.row && b.col + 1 == a.col {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

/// Fixed-size cell lattice. Dimensions are set once at construction;
/// regeneration always builds a brand-new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// A grid with every wall closed. Both dimensions must be >= 1.
    pub fn new(cols: u32, rows: u32) -> Result<Self, MazeError> {
        if cols == 0 || rows == 0 {
            return Err(MazeError::InvalidDimensions { cols, rows });
        }
        Ok(Self {
            cols,
            rows,
            cells: vec![W_ALL; (cols as usize) * (rows as usize)],
        })
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    pub(crate) fn idx(&self, cell: Cell) -> usize {
        (cell.row as usize) * (self.cols as usize) + (cell.col as usize)
    }

    /// Wall bitmask at `cell`. Out-of-bounds reads as fully walled so a bad
    /// coordinate can never fake an open passage.
    pub fn walls(&self, cell: Cell) -> u8 {
        if !self.contains(cell) {
            return W_ALL;
        }
        self.cells[self.idx(cell)]
    }

    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        self.walls(cell) & direction.wall_bit() != 0
    }

    /// The up-to-four in-bounds axis-aligned neighbors of `cell`, in
    /// up/right/down/left order. No diagonals, no wrap-around.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(4);
        for dir in Direction::ALL {
            if let Some(n) = dir.step(cell, self.cols, self.rows) {
                out.push(n);
            }
        }
        out
    }

    /// Clears the wall pair between two grid-adjacent cells. Both sides are
    /// updated in the same call, which is what keeps the wall-symmetry
    /// invariant: `a`'s wall facing `b` is open iff `b`'s wall facing `a`
    /// is open.
    pub fn open_wall_between(&mut self, a: Cell, b: Cell) -> Result<(), MazeError> {
        if !self.contains(a) || !self.contains(b) {
            return Err(MazeError::NotAdjacent { a, b });
        }
        let dir = Direction::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;
        let (ia, ib) = (self.idx(a), self.idx(b));
        self.cells[ia] &= !dir.wall_bit();
        self.cells[ib] &= !dir.opposite().wall_bit();
        Ok(())
    }

    /// Number of open wall *pairs*. A spanning tree over the grid has
    /// exactly `cols * rows - 1` of them.
    pub fn open_wall_pairs(&self) -> usize {
        let open_bits: u32 = self
            .cells
            .iter()
            .map(|c| (!*c & W_ALL).count_ones())
            .sum();
        // Symmetry means every open passage is counted once per side.
        (open_bits / 2) as usize
    }

    pub(crate) fn cells(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(MazeError::InvalidDimensions { cols: 0, rows: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(MazeError::InvalidDimensions { cols: 5, rows: 0 })
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn starts_fully_walled() {
        let grid = Grid::new(3, 3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.walls(Cell::new(col, row)), W_ALL);
            }
        }
        assert_eq!(grid.open_wall_pairs(), 0);
    }

    #[test]
    fn neighbor_counts_match_position() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.neighbors(Cell::new(0, 0)).len(), 2); // corner
        assert_eq!(grid.neighbors(Cell::new(1, 0)).len(), 3); // edge
        assert_eq!(grid.neighbors(Cell::new(1, 1)).len(), 4); // interior
        assert_eq!(grid.neighbors(Cell::new(3, 2)).len(), 2); // far corner
    }

    #[test]
    fn neighbors_stay_axis_aligned() {
        let grid = Grid::new(3, 3).unwrap();
        let ns = grid.neighbors(Cell::new(1, 1));
        assert_eq!(
            ns,
            vec![
                Cell::new(1, 0), // up
                Cell::new(2, 1), // right
                Cell::new(1, 2), // down
                Cell::new(0, 1), // left
            ]
        );
    }

    #[test]
    fn opening_a_wall_clears_both_sides() {
        let mut grid = Grid::new(3, 3).unwrap();
        let a = Cell::new(1, 1);
        let b = Cell::new(1, 0); // above a
        grid.open_wall_between(a, b).unwrap();

        assert!(!grid.has_wall(a, Direction::Up));
        assert!(!grid.has_wall(b, Direction::Down));
        // Everything else on both cells stays closed.
        assert_eq!(grid.walls(a) & (W_RIGHT | W_DOWN | W_LEFT), W_RIGHT | W_DOWN | W_LEFT);
        assert_eq!(grid.walls(b) & (W_UP | W_RIGHT | W_LEFT), W_UP | W_RIGHT | W_LEFT);
        assert_eq!(grid.open_wall_pairs(), 1);
    }

    #[test]
    fn horizontal_open_follows_the_same_convention() {
        let mut grid = Grid::new(3, 3).unwrap();
        let a = Cell::new(0, 2);
        let b = Cell::new(1, 2); // right of a
        grid.open_wall_between(a, b).unwrap();
        assert!(!grid.has_wall(a, Direction::Right));
        assert!(!grid.has_wall(b, Direction::Left));
    }

    #[test]
    fn non_adjacent_cells_are_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();
        let diagonal = grid.open_wall_between(Cell::new(0, 0), Cell::new(1, 1));
        assert!(matches!(diagonal, Err(MazeError::NotAdjacent { .. })));

        let distant = grid.open_wall_between(Cell::new(0, 0), Cell::new(2, 0));
        assert!(matches!(distant, Err(MazeError::NotAdjacent { .. })));

        let same = grid.open_wall_between(Cell::new(1, 1), Cell::new(1, 1));
        assert!(matches!(same, Err(MazeError::NotAdjacent { .. })));

        let outside = grid.open_wall_between(Cell::new(3, 3), Cell::new(4, 3));
        assert!(matches!(outside, Err(MazeError::NotAdjacent { .. })));
    }

    #[test]
    fn out_of_bounds_reads_as_fully_walled() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.walls(Cell::new(2, 0)), W_ALL);
        assert_eq!(grid.walls(Cell::new(0, 9)), W_ALL);
    }

    #[test]
    fn step_respects_bounds() {
        let cols = 3;
        let rows = 2;
        assert_eq!(Direction::Up.step(Cell::new(0, 0), cols, rows), None);
        assert_eq!(Direction::Left.step(Cell::new(0, 0), cols, rows), None);
        assert_eq!(
            Direction::Right.step(Cell::new(0, 0), cols, rows),
            Some(Cell::new(1, 0))
        );
        assert_eq!(
            Direction::Down.step(Cell::new(0, 0), cols, rows),
            Some(Cell::new(0, 1))
        );
        assert_eq!(Direction::Right.step(Cell::new(2, 0), cols, rows), None);
        assert_eq!(Direction::Down.step(Cell::new(0, 1), cols, rows), None);
    }

    #[test]
    fn direction_string_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_action_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_action_str("jump"), None);
    }
}
