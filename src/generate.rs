//! Maze carving.
//!
//! Both algorithms produce a spanning tree over the whole grid: every cell
//! reachable, exactly one simple path between any two cells, no cycles.
//! They differ only in growth order, which gives the mazes a different
//! texture (long winding corridors vs. short branchy ones).
//!
//! The random source is injected so a fixed seed reproduces an exact maze
//! shape in tests.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MazeError;
use crate::grid::{Cell, Grid};

/// Which carving strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Depth-first carve with an explicit stack (recursive backtracker).
    Backtracker,
    /// Prim-style growth from a frontier of not-yet-included cells.
    FrontierGrowth,
}

/// Where carving starts. The choice does not affect the spanning-tree
/// guarantee, only which maze a given seed produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartCell {
    /// Fixed origin `(0, 0)`.
    Origin,
    /// Uniformly random cell.
    Random,
}

/// Builds a fully connected maze over a fresh `cols x rows` grid.
///
/// A 1x1 grid is trivially complete and returns with zero carves.
pub fn generate<R: Rng>(
    cols: u32,
    rows: u32,
    algorithm: Algorithm,
    start: StartCell,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(cols, rows)?;
    let start = match start {
        StartCell::Origin => Cell::new(0, 0),
        StartCell::Random => Cell::new(rng.gen_range(0..cols), rng.gen_range(0..rows)),
    };
    match algorithm {
        Algorithm::Backtracker => carve_backtracker(&mut grid, start, rng)?,
        Algorithm::FrontierGrowth => carve_frontier(&mut grid, start, rng)?,
    }
    Ok(grid)
}

/// Depth-first carve. The stack holds the path back to the start; it only
/// empties once every cell has been visited, so termination and full
/// coverage come for free.
fn carve_backtracker<R: Rng>(grid: &mut Grid, start: Cell, rng: &mut R) -> Result<(), MazeError> {
    let mut visited = vec![false; (grid.cols() as usize) * (grid.rows() as usize)];
    visited[grid.idx(start)] = true;

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        let unvisited: Vec<Cell> = grid
            .neighbors(current)
            .into_iter()
            .filter(|n| !visited[grid.idx(*n)])
            .collect();

        match unvisited.choose(rng) {
            Some(&next) => {
                grid.open_wall_between(current, next)?;
                visited[grid.idx(next)] = true;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(())
}

/// Prim-style growth. Each frontier cell is connected to exactly one
/// already-included neighbor, so the open passages stay cycle-free.
fn carve_frontier<R: Rng>(grid: &mut Grid, start: Cell, rng: &mut R) -> Result<(), MazeError> {
    let n = (grid.cols() as usize) * (grid.rows() as usize);
    let mut in_maze = vec![false; n];
    let mut in_frontier = vec![false; n];

    in_maze[grid.idx(start)] = true;
    let mut frontier: Vec<Cell> = Vec::new();
    for neighbor in grid.neighbors(start) {
        in_frontier[grid.idx(neighbor)] = true;
        frontier.push(neighbor);
    }

    while !frontier.is_empty() {
        let pick = rng.gen_range(0..frontier.len());
        let cell = frontier.swap_remove(pick);

        let included: Vec<Cell> = grid
            .neighbors(cell)
            .into_iter()
            .filter(|c| in_maze[grid.idx(*c)])
            .collect();
        // A frontier cell always borders the maze; `included` is non-empty.
        if let Some(&anchor) = included.choose(rng) {
            grid.open_wall_between(cell, anchor)?;
        }
        in_maze[grid.idx(cell)] = true;

        for neighbor in grid.neighbors(cell) {
            let i = grid.idx(neighbor);
            if !in_maze[i] && !in_frontier[i] {
                in_frontier[i] = true;
                frontier.push(neighbor);
            }
        }
    }
    Ok(())
}
