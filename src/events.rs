#[cfg(feature = "serde")]
use serde::Serialize;

use crate::grid::Position;

/// Events emitted while a maze is generated, for presentation layers to replay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "event", rename_all = "snake_case"))]
pub enum MazeEvent<D> {
    /// A cell was entered. `first_visit` is false when the walk re-enters or leaves a cell
    /// while backtracking; those markers may repeat for the same cell.
    CellVisited { cell: Position, first_visit: bool },

    /// The wall between two neighbouring cells was carved.
    WallRemoved {
        from: Position,
        to: Position,
        from_direction: D,
        to_direction: D,
    },

    /// The backtracking stack emptied. Always the last event.
    GenerationComplete,
}

impl<D> MazeEvent<D> {
    pub fn is_complete(&self) -> bool {
        matches!(self, MazeEvent::GenerationComplete)
    }
}
