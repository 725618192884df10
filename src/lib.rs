//! Incremental perfect-maze generation over rectangle and hexagon grids.
//!
//! Build a [`Grid`], hand it to a [`MazeGenerator`] and call [`MazeGenerator::step`] once per
//! animation tick (or [`MazeGenerator::drain_all`] for instant generation). Each step returns the
//! [`MazeEvent`]s a presentation layer needs to repaint its own tiles.

pub mod error;
pub mod events;
pub mod generator;
pub mod grid;
pub mod render;
pub mod topology;

pub use error::MazeError;
pub use events::MazeEvent;
pub use generator::{MazeGenerator, Phase, StepOutcome};
pub use grid::{Cell, CellId, Grid, Position, Size};
pub use topology::{
    Direction, HexDirection, Hexagon, RectDirection, Rectangle, Topology, TopologyKind,
};
