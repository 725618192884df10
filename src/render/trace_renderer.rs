use std::fs::File;
use std::io::BufWriter;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::Serialize;

use super::Renderer;
use crate::events::MazeEvent;
use crate::grid::Grid;
use crate::topology::{Topology, TopologyKind};

#[derive(Debug, Serialize)]
struct Trace<'a, D> {
    topology: TopologyKind,
    width: usize,
    height: usize,
    events: &'a [MazeEvent<D>],
}

/// Records the event stream and writes it to a JSON file at the end.
pub struct TraceRenderer<T: Topology> {
    output_path: PathBuf,
    grid_size: (usize, usize),
    events: Vec<MazeEvent<T::Direction>>,
    topology: PhantomData<T>,
}

impl<T: Topology> TraceRenderer<T> {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            grid_size: (0, 0),
            events: Vec::new(),
            topology: PhantomData,
        }
    }
}

impl<T> Renderer<T> for TraceRenderer<T>
where
    T: Topology,
    T::Direction: Serialize,
{
    type Error = String;

    fn initialize(&mut self, grid: &Grid<T>) -> Result<(), Self::Error> {
        self.grid_size = (grid.width(), grid.height());
        self.events.reserve(grid.size() * 4);

        Ok(())
    }

    fn handle_event(&mut self, event: &MazeEvent<T::Direction>) -> Result<(), Self::Error> {
        self.events.push(event.clone());

        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        let file = File::create(&self.output_path)
            .map_err(|e| format!("Failed to create {}: {}", self.output_path.display(), e))?;

        let trace = Trace {
            topology: T::KIND,
            width: self.grid_size.0,
            height: self.grid_size.1,
            events: &self.events,
        };

        serde_json::to_writer(BufWriter::new(file), &trace)
            .map_err(|e| format!("Failed to write event trace: {}", e))
    }
}
