//! Model lifecycle and the cooperative stepping loop
//!
//! A [`Model`] owns the cell grid, the FIFO worklist, and a seeded generator
//! for one generation run. Each [`Model::step`] call does one bounded unit of
//! work and returns; when the engine needs randomness it reports a request
//! instead of drawing internally, which keeps the stepping loop free of any
//! event-loop dependency. Batch callers use [`Model::solve`] and let the
//! model's own generator answer every request.

use crate::algorithm::candidates::{CandidateSet, CellState};
use crate::algorithm::propagation::{Step, apply_step};
use crate::algorithm::selection::{RandomPair, select_collapse};
use crate::io::error::{EngineError, Result};
use crate::spatial::grid::{Grid, Position};
use crate::spatial::tiles::{SocketTile, TilesDefinition};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

/// Opaque handle for one outstanding randomness request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomRequest {
    token: u64,
}

/// Outcome of a single cooperative step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One worklist step was applied
    Advanced,
    /// The engine needs one random pair before it can continue; answer it
    /// through [`Model::resume_with_random`]
    NeedsRandom(RandomRequest),
    /// Every cell is fixed; further calls are no-ops
    Complete,
}

/// Propagation state for one generation run
///
/// Created once by [`Model::init`], mutated only through manual placements
/// and stepping, and owned by a single embedding caller; it is never shared
/// across concurrent mutators, so mutation happens in place.
#[derive(Debug)]
pub struct Model<T> {
    grid: Grid<CellState>,
    worklist: VecDeque<Step>,
    definition: TilesDefinition<T>,
    rng: StdRng,
    pending: Option<u64>,
    issued: u64,
}

impl<T: SocketTile + Clone> Model<T> {
    /// Create an all-superposition model for the given definition
    ///
    /// Every cell starts as the full candidate set `{0..n-1}` and the
    /// worklist starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDefinition`] when the definition has a
    /// zero dimension or an empty tile catalog.
    pub fn init(definition: TilesDefinition<T>) -> Result<Self> {
        definition.validate()?;
        let blank = CellState::Superposition(CandidateSet::all(definition.tiles.len()));
        let grid = Grid::repeat(definition.width, definition.height, blank);
        let rng = StdRng::seed_from_u64(definition.seed);
        Ok(Self {
            grid,
            worklist: VecDeque::new(),
            definition,
            rng,
            pending: None,
            issued: 0,
        })
    }

    /// Read-only view of the live cell grid, partial state included
    pub const fn grid(&self) -> &Grid<CellState> {
        &self.grid
    }

    /// The definition this model was created from
    pub const fn definition(&self) -> &TilesDefinition<T> {
        &self.definition
    }

    /// Number of queued steps awaiting processing
    pub fn pending_steps(&self) -> usize {
        self.worklist.len()
    }

    /// Number of committed cells
    pub fn fixed_count(&self) -> usize {
        self.grid.fold(0, |acc, cell| acc + usize::from(cell.is_fixed()))
    }

    /// Queue a placement ahead of all pending automatic steps
    ///
    /// The placement is applied as-is when its turn comes, with no legality
    /// check against the cell's current candidates. Any outstanding
    /// randomness request is cancelled: it was issued against the grid as it
    /// stood before this placement, and answering it would run the selector
    /// on stale state. A reply to a cancelled request is rejected as stale;
    /// the next idle [`Model::step`] issues a fresh request.
    pub fn manual_place(&mut self, pos: Position, tile: usize) {
        self.pending = None;
        self.worklist.push_front(Step::PlaceTile { pos, tile });
    }

    /// True once every cell holds a fixed tile
    ///
    /// A superposition narrowed to a single candidate still counts as
    /// unsolved; only an explicit placement commits a cell.
    pub fn is_solved(&self) -> bool {
        self.grid.fold(true, |acc, cell| acc && cell.is_fixed())
    }

    /// True if any cell's candidate set has been emptied
    ///
    /// A contradicted run stalls rather than failing: the selector keeps
    /// finding nothing to place and the worklist stays empty while
    /// [`Model::is_solved`] stays false.
    pub fn has_contradiction(&self) -> bool {
        self.grid.fold(false, |acc, cell| {
            acc || matches!(cell, CellState::Superposition(set) if set.is_empty())
        })
    }

    /// Perform one bounded unit of work
    ///
    /// Pops and applies the front worklist step when one is pending,
    /// appending its follow-ups at the back. With an empty worklist and an
    /// unsolved grid the engine instead asks for one random pair; an
    /// unanswered request is reported again on every subsequent call until
    /// [`Model::resume_with_random`] supplies the pair or a manual placement
    /// cancels the request.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(token) = self.pending {
            return StepOutcome::NeedsRandom(RandomRequest { token });
        }
        if let Some(step) = self.worklist.pop_front() {
            let follow_ups = apply_step(&mut self.grid, &self.definition, &step);
            self.worklist.extend(follow_ups);
            return StepOutcome::Advanced;
        }
        if self.is_solved() {
            return StepOutcome::Complete;
        }
        self.issued += 1;
        let token = self.issued;
        self.pending = Some(token);
        StepOutcome::NeedsRandom(RandomRequest { token })
    }

    /// Answer an outstanding randomness request
    ///
    /// Runs the collapse selector with the supplied pair and queues its
    /// placement, if any. When the selector finds a contradicted cell it
    /// emits nothing and the worklist stays empty — the stall described on
    /// [`Model::has_contradiction`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StaleRandomRequest`] when `request` does not
    /// match the request currently outstanding for this model.
    pub fn resume_with_random(&mut self, request: RandomRequest, pair: RandomPair) -> Result<()> {
        if self.pending != Some(request.token) {
            return Err(EngineError::StaleRandomRequest {
                token: request.token,
            });
        }
        self.pending = None;
        if let Some(step) = select_collapse(&self.grid, pair) {
            self.worklist.push_back(step);
        }
        Ok(())
    }

    /// One unit of work in synchronous mode
    ///
    /// Identical to [`Model::step`] except that randomness requests are
    /// answered immediately from the model's own seeded generator. Returns
    /// `false` once no further progress is possible: the grid is solved, or
    /// a contradiction has stalled the run.
    pub fn step_synchronous(&mut self) -> bool {
        match self.step() {
            StepOutcome::Advanced => true,
            StepOutcome::Complete => false,
            StepOutcome::NeedsRandom(request) => {
                let pair = RandomPair {
                    position: self.rng.random(),
                    tile: self.rng.random(),
                };
                // The token was issued by the step() call above
                self.resume_with_random(request, pair).is_ok() && !self.worklist.is_empty()
            }
        }
    }

    /// Map the grid to concrete tiles, defaulting unresolved cells
    ///
    /// `Fixed(i)` renders as catalog tile `i` (the default tile when `i` is
    /// out of range); any remaining superposition renders as the default
    /// tile.
    pub fn render(&self) -> Grid<T> {
        self.grid.map(|cell| match cell {
            CellState::Fixed(index) => self.definition.tile(*index).clone(),
            CellState::Superposition(_) => self.definition.default_tile.clone(),
        })
    }

    /// Drive a fresh model to a fixed point and read out the tile grid
    ///
    /// Repeatedly steps with the seeded generator supplying every draw. On
    /// a contradiction the loop stops early and the stalled cells render as
    /// the default tile.
    ///
    /// # Errors
    ///
    /// Returns an error when the definition fails validation.
    pub fn solve(definition: TilesDefinition<T>) -> Result<Grid<T>> {
        let mut model = Self::init(definition)?;
        while model.step_synchronous() {}
        Ok(model.render())
    }
}
