//! Randomised depth-first backtracking, one round per [`MazeGenerator::step`].

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::error::MazeError;
use crate::events::MazeEvent;
use crate::grid::{CellId, Grid, Position};
use crate::topology::{Direction, Topology};

pub type Event<T> = MazeEvent<<T as Topology>::Direction>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Complete,
}

/// The events produced by one round, and whether the maze is now finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome<D> {
    pub events: Vec<MazeEvent<D>>,
    pub complete: bool,
}

pub struct MazeGenerator<T, R = XorShiftRng>
where
    T: Topology,
    R: Rng,
{
    grid: Grid<T>,
    rng: R,
    phase: Phase,
    /// Backtracking stack; the top is the current cell.
    stack: Vec<CellId>,
    remaining: usize,
}

impl<T: Topology> MazeGenerator<T, XorShiftRng> {
    pub fn seeded(grid: Grid<T>, seed: u64) -> Self {
        Self::new(grid, XorShiftRng::seed_from_u64(seed))
    }
}

impl<T, R> MazeGenerator<T, R>
where
    T: Topology,
    R: Rng,
{
    pub fn new(grid: Grid<T>, rng: R) -> Self {
        Self {
            stack: Vec::with_capacity(grid.size()),
            remaining: grid.unvisited_count(),
            phase: Phase::Idle,
            grid,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn current(&self) -> Option<Position> {
        self.stack.last().map(|&id| self.grid.position_of(id))
    }

    /// The cells on the backtracking stack, oldest first.
    pub fn path(&self) -> Vec<Position> {
        self.stack
            .iter()
            .map(|&id| self.grid.position_of(id))
            .collect()
    }

    /// Cells that have not been visited yet.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Picks a uniformly random starting cell and visits it.
    ///
    /// The generator is `Running` afterwards even on a 1x1 grid: the start cell is only popped,
    /// and `GenerationComplete` emitted, by the next [`step`](Self::step).
    pub fn start(&mut self) -> Result<Vec<Event<T>>, MazeError> {
        if self.phase != Phase::Idle {
            Err(MazeError::AlreadyStarted)?
        }

        Ok(self.begin())
    }

    /// Runs one round: carve towards a random unvisited neighbour, or backtrack one cell.
    /// An idle generator starts instead; a complete one returns no events.
    pub fn step(&mut self) -> Result<StepOutcome<T::Direction>, MazeError> {
        let events = match self.phase {
            Phase::Idle => self.begin(),
            Phase::Running => self.advance()?,
            Phase::Complete => Vec::new(),
        };

        Ok(StepOutcome {
            events,
            complete: self.is_complete(),
        })
    }

    /// Steps until complete and returns every event in order.
    pub fn drain_all(&mut self) -> Result<Vec<Event<T>>, MazeError> {
        let mut log = Vec::with_capacity(self.grid.size() * 4);

        loop {
            let outcome = self.step()?;

            log.extend(outcome.events);

            if outcome.complete {
                return Ok(log);
            }
        }
    }

    fn begin(&mut self) -> Vec<Event<T>> {
        let id = self.rng.gen_range(0..self.grid.size());
        let mut events = Vec::with_capacity(1);

        debug!("Starting at {:?}", self.grid.position_of(id));

        self.phase = Phase::Running;
        self.visit(id, &mut events);

        events
    }

    fn advance(&mut self) -> Result<Vec<Event<T>>, MazeError> {
        let mut events = Vec::with_capacity(2);

        let current = match self.stack.last() {
            Some(&id) => id,
            None => {
                self.finish(&mut events);
                return Ok(events);
            }
        };

        loop {
            let choices = self.grid.cell(current).neighbours();

            if choices.is_empty() {
                break;
            }

            let (direction, next) = choices[self.rng.gen_range(0..choices.len())];

            if self.grid.cell(next).visited {
                // reached through another passage already; the wall stays
                self.grid.forget(current, direction);
                continue;
            }

            let from = self.grid.position_of(current);
            let to = self.grid.connect(from, direction)?;

            trace!("Carving {:?} -> {:?} ({})", from, to, direction);

            events.push(MazeEvent::WallRemoved {
                from,
                to,
                from_direction: direction,
                to_direction: direction.opposite(),
            });
            self.visit(next, &mut events);

            return Ok(events);
        }

        // dead end
        self.stack.pop();

        let left = self.grid.position_of(current);

        trace!("Backtracking from {:?}", left);

        events.push(MazeEvent::CellVisited {
            cell: left,
            first_visit: false,
        });

        match self.stack.last() {
            Some(&id) => events.push(MazeEvent::CellVisited {
                cell: self.grid.position_of(id),
                first_visit: false,
            }),
            None => self.finish(&mut events),
        }

        Ok(events)
    }

    fn visit(&mut self, id: CellId, events: &mut Vec<Event<T>>) {
        self.grid.mark_visited(id);
        self.stack.push(id);
        self.remaining -= 1;

        events.push(MazeEvent::CellVisited {
            cell: self.grid.position_of(id),
            first_visit: true,
        });
    }

    fn finish(&mut self, events: &mut Vec<Event<T>>) {
        debug!("Generation complete");

        self.phase = Phase::Complete;
        events.push(MazeEvent::GenerationComplete);
    }
}
