use log::{info, trace};

use super::Renderer;
use crate::events::MazeEvent;
use crate::grid::Grid;
use crate::topology::Topology;

/// Logs every event at trace level and a summary once generation ends.
#[derive(Debug, Default)]
pub struct LogRenderer {
    first_visits: usize,
    revisits: usize,
    walls_removed: usize,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn walls_removed(&self) -> usize {
        self.walls_removed
    }
}

impl<T: Topology> Renderer<T> for LogRenderer {
    type Error = String;

    fn initialize(&mut self, grid: &Grid<T>) -> Result<(), Self::Error> {
        info!(
            "Generating {}x{} {} maze",
            grid.width(),
            grid.height(),
            grid.kind()
        );

        Ok(())
    }

    fn handle_event(&mut self, event: &MazeEvent<T::Direction>) -> Result<(), Self::Error> {
        match event {
            MazeEvent::CellVisited { cell, first_visit } => {
                if *first_visit {
                    self.first_visits += 1;
                } else {
                    self.revisits += 1;
                }

                trace!("visit {:?} first={}", cell, first_visit);
            }
            MazeEvent::WallRemoved {
                from,
                to,
                from_direction,
                ..
            } => {
                self.walls_removed += 1;

                trace!("carve {:?} -> {:?} via {}", from, to, from_direction);
            }
            MazeEvent::GenerationComplete => trace!("complete"),
        }

        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        info!(
            "{} cells visited, {} walls removed, {} backtrack markers",
            self.first_visits, self.walls_removed, self.revisits
        );

        Ok(())
    }
}
