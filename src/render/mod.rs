pub mod layout;
pub mod log_renderer;
pub mod state;
pub mod text_renderer;

#[cfg(feature = "cli")]
pub mod trace_renderer;

#[cfg(feature = "image")]
pub mod image_renderer;

use crate::events::MazeEvent;
use crate::grid::Grid;
use crate::topology::Topology;

pub use layout::Layout;
pub use log_renderer::LogRenderer;
pub use state::{Floor, MazeState};
pub use text_renderer::TextRenderer;

/// A consumer of the generation event stream. Renderers keep their own tile state and never
/// touch the grid or generator after `initialize`.
pub trait Renderer<T: Topology> {
    type Error;

    /// Called once with the freshly built grid, before any events.
    fn initialize(&mut self, grid: &Grid<T>) -> Result<(), Self::Error>;

    fn handle_event(&mut self, event: &MazeEvent<T::Direction>) -> Result<(), Self::Error>;

    /// Called after the last event (save to file, print the final maze, ...)
    fn finalize(&mut self) -> Result<(), Self::Error>;
}
