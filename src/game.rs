//! Navigation controller: owns the current maze, ball, goal and score,
//! services discrete moves, and regenerates the level when the goal is
//! reached.
//!
//! Moves are processed synchronously one at a time. Readers (a renderer
//! redrawing concurrently with game logic elsewhere in the app) never look
//! at the controller's fields directly; they hold the [`Snapshot`] `Arc`,
//! which is replaced wholesale on every committed change. A half-updated
//! combination of old maze and new ball position is therefore not
//! observable.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::connect::is_connected;
use crate::error::MazeError;
use crate::generate::{generate, Algorithm, StartCell};
use crate::grid::{Cell, Direction, Grid};

/// Level parameters, fixed for the lifetime of a [`MazeGame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: u32,
    pub rows: u32,
    pub algorithm: Algorithm,
    pub start: StartCell,
    /// Ball/goal draws per maze before giving up and carving a fresh one.
    pub placement_retries: u32,
    /// Fresh mazes tried before surfacing [`MazeError::PlacementExhausted`].
    /// With a spanning-tree generator the first maze always succeeds; the
    /// budget exists so the defensive path can never loop forever.
    pub regen_retries: u32,
}

impl GameConfig {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), MazeError> {
        // The game needs two distinct cells for ball and goal, so a 1x1
        // grid is rejected here even though it is a valid (trivial) maze.
        if self.cols == 0 || self.rows == 0 || (self.cols as u64) * (self.rows as u64) < 2 {
            return Err(MazeError::InvalidDimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 10,
            algorithm: Algorithm::Backtracker,
            start: StartCell::Random,
            placement_retries: 64,
            regen_retries: 8,
        }
    }
}

/// Outcome of one processed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    /// Closed wall or grid boundary; the ball did not move. Normal
    /// gameplay, never an error.
    Bump,
    /// The ball advanced exactly one cell.
    Moved,
    /// The ball advanced onto the goal: score went up by one and a new
    /// level was generated and published.
    ReachedGoal,
}

impl MoveEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveEvent::Bump => "bump",
            MoveEvent::Moved => "moved",
            MoveEvent::ReachedGoal => "reached_goal",
        }
    }
}

/// Immutable view of one fully-formed game state, published atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub cols: u32,
    pub rows: u32,
    /// Per-cell wall bitmasks, row-major. Interpret via [`Snapshot::has_wall`].
    pub walls: Vec<u8>,
    pub ball: Cell,
    pub goal: Cell,
    pub score: u32,
}

impl Snapshot {
    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        if cell.col >= self.cols || cell.row >= self.rows {
            return true;
        }
        let idx = (cell.row as usize) * (self.cols as usize) + (cell.col as usize);
        self.walls[idx] & direction.wall_bit() != 0
    }
}

/// The playing/regenerating state machine. `Playing` is the steady state;
/// `Regenerating` happens entirely inside the `attempt_move` call that hit
/// the goal, so callers only ever see `Playing`.
pub struct MazeGame {
    config: GameConfig,
    grid: Grid,
    ball: Cell,
    goal: Cell,
    score: u32,
    rng: StdRng,
    snapshot: Arc<Snapshot>,
}

impl MazeGame {
    /// Entropy-seeded game. Fails fast on bad dimensions.
    pub fn new(config: GameConfig) -> Result<Self, MazeError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Reproducible game: the same seed yields the same sequence of mazes
    /// and placements.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, MazeError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, MazeError> {
        config.validate()?;
        let (grid, ball, goal) = build_level(&config, &mut rng)?;
        let snapshot = Arc::new(make_snapshot(&grid, ball, goal, 0));
        Ok(Self {
            config,
            grid,
            ball,
            goal,
            score: 0,
            rng,
            snapshot,
        })
    }

    /// Processes one discrete move from the input collaborator.
    ///
    /// A closed wall or the grid boundary is a silent no-op (`Bump`).
    /// Reaching the goal increments the score, swaps in a freshly carved
    /// level and publishes the whole new state in one step. The only error
    /// is `PlacementExhausted` out of the defensive regeneration path,
    /// which is unreachable while generation guarantees a spanning tree.
    pub fn attempt_move(&mut self, direction: Direction) -> Result<MoveEvent, MazeError> {
        if self.grid.has_wall(self.ball, direction) {
            return Ok(MoveEvent::Bump);
        }
        let Some(next) = direction.step(self.ball, self.grid.cols(), self.grid.rows()) else {
            // Boundary walls are never carved, so this only triggers if the
            // wall bits and the bounds ever disagree.
            return Ok(MoveEvent::Bump);
        };

        if next == self.goal {
            // Build the replacement level before touching any state so a
            // failure leaves the current game fully intact.
            let (grid, ball, goal) = build_level(&self.config, &mut self.rng)?;
            self.score += 1;
            self.grid = grid;
            self.ball = ball;
            self.goal = goal;
            self.publish();
            debug!(score = self.score, "goal reached, new level published");
            return Ok(MoveEvent::ReachedGoal);
        }

        self.ball = next;
        self.publish();
        Ok(MoveEvent::Moved)
    }

    /// The current fully-formed state. Cloning the `Arc` is cheap; the
    /// returned snapshot never changes under the reader's feet.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn ball(&self) -> Cell {
        self.ball
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn publish(&mut self) {
        self.snapshot = Arc::new(make_snapshot(&self.grid, self.ball, self.goal, self.score));
    }
}

fn make_snapshot(grid: &Grid, ball: Cell, goal: Cell, score: u32) -> Snapshot {
    Snapshot {
        cols: grid.cols(),
        rows: grid.rows(),
        walls: grid.cells().to_vec(),
        ball,
        goal,
        score,
    }
}

/// Carves a maze and places a connected ball/goal pair on it. Placement is
/// drawn uniformly and re-drawn while the pair is equal or unreachable;
/// if the per-maze budget runs out the maze itself is regenerated.
fn build_level(config: &GameConfig, rng: &mut StdRng) -> Result<(Grid, Cell, Cell), MazeError> {
    let mut attempts = 0;
    for _ in 0..config.regen_retries.max(1) {
        let grid = generate(config.cols, config.rows, config.algorithm, config.start, rng)?;
        if let Some((ball, goal)) = place_pair(&grid, config.placement_retries, rng, &mut attempts)
        {
            return Ok((grid, ball, goal));
        }
        debug!(attempts, "placement budget spent, carving a fresh maze");
    }
    Err(MazeError::PlacementExhausted { attempts })
}

fn place_pair<R: Rng>(
    grid: &Grid,
    retries: u32,
    rng: &mut R,
    attempts: &mut u32,
) -> Option<(Cell, Cell)> {
    for _ in 0..retries.max(1) {
        *attempts += 1;
        let ball = random_cell(grid, rng);
        let goal = random_cell(grid, rng);
        if ball != goal && is_connected(grid, ball, goal) {
            return Some((ball, goal));
        }
    }
    None
}

fn random_cell<R: Rng>(grid: &Grid, rng: &mut R) -> Cell {
    Cell::new(rng.gen_range(0..grid.cols()), rng.gen_range(0..grid.rows()))
}
