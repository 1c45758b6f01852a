//! Connectivity oracle.
//!
//! Independent of how a maze was carved: it only trusts the wall bits, so
//! it doubles as the safety net under random ball/goal placement and as a
//! directly testable invariant.

use crate::grid::{Cell, Direction, Grid};

/// Whether `b` is reachable from `a` through open passages.
///
/// Explicit-stack depth-first search over the cell arena; every cell is
/// expanded at most once, so this is O(cols * rows) time and space.
/// Out-of-bounds endpoints are never reachable; `a == b` trivially is.
pub fn is_connected(grid: &Grid, a: Cell, b: Cell) -> bool {
    if !grid.contains(a) || !grid.contains(b) {
        return false;
    }
    if a == b {
        return true;
    }

    let mut visited = vec![false; (grid.cols() as usize) * (grid.rows() as usize)];
    visited[grid.idx(a)] = true;

    let mut stack = vec![a];
    while let Some(cell) = stack.pop() {
        if cell == b {
            return true;
        }
        for dir in Direction::ALL {
            if grid.has_wall(cell, dir) {
                continue;
            }
            // An open wall on an in-bounds cell always faces an in-bounds
            // neighbor (boundary walls are never opened), but `step` checks
            // anyway.
            if let Some(next) = dir.step(cell, grid.cols(), grid.rows()) {
                let i = grid.idx(next);
                if !visited[i] {
                    visited[i] = true;
                    stack.push(next);
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sealed_grid_connects_nothing_but_self() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(is_connected(&grid, Cell::new(1, 1), Cell::new(1, 1)));
        assert!(!is_connected(&grid, Cell::new(0, 0), Cell::new(0, 1)));
        assert!(!is_connected(&grid, Cell::new(0, 0), Cell::new(2, 2)));
    }

    #[test]
    fn follows_only_open_passages() {
        // Corridor along the top row: (0,0) - (1,0) - (2,0).
        let mut grid = Grid::new(3, 2).unwrap();
        grid.open_wall_between(Cell::new(0, 0), Cell::new(1, 0)).unwrap();
        grid.open_wall_between(Cell::new(1, 0), Cell::new(2, 0)).unwrap();

        assert!(is_connected(&grid, Cell::new(0, 0), Cell::new(2, 0)));
        assert!(is_connected(&grid, Cell::new(2, 0), Cell::new(0, 0)));
        // Bottom row is still sealed off.
        assert!(!is_connected(&grid, Cell::new(0, 0), Cell::new(0, 1)));
        assert!(!is_connected(&grid, Cell::new(2, 0), Cell::new(2, 1)));
    }

    #[test]
    fn detects_two_separate_components() {
        // Two vertical corridors with no link between them.
        let mut grid = Grid::new(2, 3).unwrap();
        for row in 0..2 {
            grid.open_wall_between(Cell::new(0, row), Cell::new(0, row + 1)).unwrap();
            grid.open_wall_between(Cell::new(1, row), Cell::new(1, row + 1)).unwrap();
        }
        assert!(is_connected(&grid, Cell::new(0, 0), Cell::new(0, 2)));
        assert!(is_connected(&grid, Cell::new(1, 0), Cell::new(1, 2)));
        assert!(!is_connected(&grid, Cell::new(0, 0), Cell::new(1, 0)));
    }

    #[test]
    fn out_of_bounds_endpoints_are_unreachable() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(!is_connected(&grid, Cell::new(0, 0), Cell::new(2, 0)));
        assert!(!is_connected(&grid, Cell::new(5, 5), Cell::new(0, 0)));
    }
}
