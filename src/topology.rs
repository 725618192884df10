//! Adjacency rules for the supported cell shapes.
//!
//! Coordinates are y-up: a cell's `Top` neighbour lives at `y + 1`. Hexagon grids use offset
//! rows where every odd row is shifted right by half a cell.

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use enum_map::{Enum, EnumArray};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::MazeError;
use crate::grid::{CellId, Position};

/// A direction out of a cell. The variant order is the direction index, and the opposite of a
/// direction is always half way round: `(d + N / 2) mod N`.
pub trait Direction:
    Enum
    + EnumArray<Option<CellId>, Array: Clone>
    + EnumArray<bool, Array: Clone>
    + Copy
    + Eq
    + Debug
    + Display
    + 'static
{
    fn name(self) -> &'static str;

    fn index(self) -> usize {
        self.into_usize()
    }

    fn opposite(self) -> Self {
        Self::from_usize((self.into_usize() + Self::LENGTH / 2) % Self::LENGTH)
    }

    fn all() -> core::iter::Map<core::ops::Range<usize>, fn(usize) -> Self> {
        (0..Self::LENGTH).map(Self::from_usize as fn(usize) -> Self)
    }
}

/// A grid shape: its direction set and the geometric neighbour rule.
pub trait Topology: Copy + Debug + Default + 'static {
    type Direction: Direction;

    const KIND: TopologyKind;

    /// The cell touching `position` across the `direction` edge, if it lies inside the grid.
    fn neighbour(
        position: Position,
        direction: Self::Direction,
        width: usize,
        height: usize,
    ) -> Option<Position>;
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Enum)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum RectDirection {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Enum)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum HexDirection {
    TopLeft,
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
    Left,
}

impl Direction for RectDirection {
    fn name(self) -> &'static str {
        match self {
            RectDirection::Top => "top",
            RectDirection::Right => "right",
            RectDirection::Bottom => "bottom",
            RectDirection::Left => "left",
        }
    }
}

impl Direction for HexDirection {
    fn name(self) -> &'static str {
        match self {
            HexDirection::TopLeft => "top-left",
            HexDirection::TopRight => "top-right",
            HexDirection::Right => "right",
            HexDirection::BottomRight => "bottom-right",
            HexDirection::BottomLeft => "bottom-left",
            HexDirection::Left => "left",
        }
    }
}

impl Display for RectDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hexagon;

fn offset(
    (x, y): Position,
    (dx, dy): (isize, isize),
    width: usize,
    height: usize,
) -> Option<Position> {
    let x = x.checked_add_signed(dx)?;
    let y = y.checked_add_signed(dy)?;

    (x < width && y < height).then_some((x, y))
}

impl Topology for Rectangle {
    type Direction = RectDirection;

    const KIND: TopologyKind = TopologyKind::Rectangle;

    fn neighbour(
        position: Position,
        direction: RectDirection,
        width: usize,
        height: usize,
    ) -> Option<Position> {
        let delta = match direction {
            RectDirection::Top => (0, 1),
            RectDirection::Right => (1, 0),
            RectDirection::Bottom => (0, -1),
            RectDirection::Left => (-1, 0),
        };

        offset(position, delta, width, height)
    }
}

impl Topology for Hexagon {
    type Direction = HexDirection;

    const KIND: TopologyKind = TopologyKind::Hexagon;

    fn neighbour(
        position: Position,
        direction: HexDirection,
        width: usize,
        height: usize,
    ) -> Option<Position> {
        // odd rows sit half a cell to the right of the even rows around them
        let shift = (position.1 % 2) as isize;

        let delta = match direction {
            HexDirection::TopLeft => (shift - 1, 1),
            HexDirection::TopRight => (shift, 1),
            HexDirection::Right => (1, 0),
            HexDirection::BottomRight => (shift, -1),
            HexDirection::BottomLeft => (shift - 1, -1),
            HexDirection::Left => (-1, 0),
        };

        offset(position, delta, width, height)
    }
}

/// Runtime topology selector, for callers that choose the shape from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum TopologyKind {
    #[default]
    Rectangle,
    Hexagon,
}

impl TopologyKind {
    pub fn direction_count(self) -> usize {
        match self {
            TopologyKind::Rectangle => RectDirection::LENGTH,
            TopologyKind::Hexagon => HexDirection::LENGTH,
        }
    }
}

impl FromStr for TopologyKind {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "rect" | "square" => Ok(TopologyKind::Rectangle),
            "hexagon" | "hex" => Ok(TopologyKind::Hexagon),
            _ => Err(MazeError::InvalidTopology(s.to_string())),
        }
    }
}

impl Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyKind::Rectangle => f.write_str("rectangle"),
            TopologyKind::Hexagon => f.write_str("hexagon"),
        }
    }
}
