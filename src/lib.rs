//! Procedural maze generation and navigation core for a grid-based
//! ball-maze game.
//!
//! The crate covers the algorithmic heart of the game and nothing else:
//! - [`grid`] — cell lattice and wall bookkeeping;
//! - [`generate`] — spanning-tree maze carving (depth-first backtracker or
//!   Prim-style frontier growth), seedable through an injected RNG;
//! - [`connect`] — independent reachability oracle over open passages;
//! - [`game`] — move processing, win detection, score, regeneration, and
//!   atomically published state snapshots.
//!
//! Rendering and raw input capture are external collaborators: a renderer
//! consumes [`game::Snapshot`]s, an input layer feeds
//! [`game::MazeGame::attempt_move`] with [`grid::Direction`]s.
//!
//! Axis convention, uniform across the crate: increasing `col` = right,
//! increasing `row` = down; `Up` decreases `row`, `Left` decreases `col`.

pub mod connect;
pub mod error;
pub mod game;
pub mod generate;
pub mod grid;

pub use connect::is_connected;
pub use error::MazeError;
pub use game::{GameConfig, MazeGame, MoveEvent, Snapshot};
pub use generate::{generate, Algorithm, StartCell};
pub use grid::{Cell, Direction, Grid};
