use enum_map::EnumMap;

use crate::events::MazeEvent;
use crate::grid::{Grid, Position};
use crate::topology::{Direction, Topology};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Floor {
    #[default]
    Unvisited,
    /// Entered for the first time; still part of the walk.
    Visited,
    /// Left or re-entered while backtracking.
    Done,
}

/// Tile state rebuilt purely from the event stream: one floor per cell and one wall per
/// direction slot per cell, including the outer boundary.
#[derive(Debug, Clone)]
pub struct MazeState<T: Topology> {
    width: usize,
    height: usize,
    floors: Vec<Floor>,
    walls: Vec<EnumMap<T::Direction, bool>>,
    removed: usize,
    complete: bool,
}

impl<T: Topology> MazeState<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            floors: vec![Floor::default(); width * height],
            walls: vec![EnumMap::from_fn(|_| true); width * height],
            removed: 0,
            complete: false,
        }
    }

    pub fn for_grid(grid: &Grid<T>) -> Self {
        Self::new(grid.width(), grid.height())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of walls carved so far.
    pub fn removed(&self) -> usize {
        self.removed
    }

    pub fn floor(&self, (x, y): Position) -> Floor {
        self.index((x, y))
            .map_or(Floor::Unvisited, |index| self.floors[index])
    }

    /// Whether the wall slot on `direction` of `position` still stands. Out of range is a wall.
    pub fn has_wall(&self, position: Position, direction: T::Direction) -> bool {
        self.index(position)
            .map_or(true, |index| self.walls[index][direction])
    }

    pub fn apply(&mut self, event: &MazeEvent<T::Direction>) {
        match *event {
            MazeEvent::CellVisited { cell, first_visit } => {
                if let Some(index) = self.index(cell) {
                    self.floors[index] = if first_visit {
                        Floor::Visited
                    } else {
                        Floor::Done
                    };
                }
            }
            MazeEvent::WallRemoved {
                from,
                to,
                from_direction,
                to_direction,
            } => {
                self.clear_wall(from, from_direction);
                self.clear_wall(to, to_direction);
                self.removed += 1;
            }
            MazeEvent::GenerationComplete => self.complete = true,
        }
    }

    /// Carved passages as `(cell, direction)` pairs, one per removed wall.
    pub fn passages(&self) -> Vec<(Position, T::Direction)> {
        let mut output = Vec::with_capacity(self.removed);

        for index in 0..self.walls.len() {
            let position = (index % self.width, index / self.width);

            for direction in T::Direction::all() {
                if self.walls[index][direction] {
                    continue;
                }

                // report each passage from one side only
                match T::neighbour(position, direction, self.width, self.height) {
                    Some((x, y)) if x + y * self.width < index => {}
                    _ => output.push((position, direction)),
                }
            }
        }

        output
    }

    fn clear_wall(&mut self, position: Position, direction: T::Direction) {
        if let Some(index) = self.index(position) {
            self.walls[index][direction] = false;
        }
    }

    fn index(&self, (x, y): Position) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }
}
