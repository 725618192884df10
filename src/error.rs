use thiserror::Error;

/// Errors surfaced by grid construction and generation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// `connect` was asked to carve an edge that is no longer (or never was) present.
    #[error("cell ({x}, {y}) has no unconnected neighbour towards {direction}")]
    NoSuchNeighbour {
        x: usize,
        y: usize,
        direction: &'static str,
    },

    #[error("unknown topology: {0}")]
    InvalidTopology(String),

    #[error("generation has already started")]
    AlreadyStarted,
}
