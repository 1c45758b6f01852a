use thiserror::Error;

use crate::grid::Cell;

/// Failures surfaced by the maze core.
///
/// Normal gameplay outcomes (bumping a wall, pushing against the boundary)
/// are *not* errors; they are reported through
/// [`MoveEvent`](crate::game::MoveEvent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Grid construction with a zero-sized dimension. Fatal to the call,
    /// never retried.
    #[error("grid dimensions must be at least 1x1, got {cols}x{rows}")]
    InvalidDimensions { cols: u32, rows: u32 },

    /// A wall-clearing call with cells that are not grid-adjacent.
    /// Indicates a bug in the caller (the generator), not a user condition.
    #[error("cells ({},{}) and ({},{}) are not adjacent", a.col, a.row, b.col, b.row)]
    NotAdjacent { a: Cell, b: Cell },

    /// The defensive ball/goal placement budget ran out. Unreachable with a
    /// spanning-tree generator, but the retry loop is bounded so a broken
    /// wall configuration can never spin forever.
    #[error("no connected ball/goal pair found after {attempts} attempts")]
    PlacementExhausted { attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = MazeError::InvalidDimensions { cols: 0, rows: 7 };
        assert!(e.to_string().contains("0x7"));

        let e = MazeError::NotAdjacent {
            a: Cell::new(1, 1),
            b: Cell::new(3, 3),
        };
        assert!(e.to_string().contains("(1,1)"));
        assert!(e.to_string().contains("(3,3)"));
    }
}
