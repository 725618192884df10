use core::str::FromStr;

use enum_map::EnumMap;
use log::debug;

use crate::error::MazeError;
use crate::topology::{Direction, Topology, TopologyKind};

pub type Position = (usize, usize);

/// Index of a cell in its grid's arena. Cells refer to each other by id, never by reference.
pub type CellId = usize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_width, raw_height) = s.split_once('x').ok_or(format!("invalid format: {}", s))?;

        let width = raw_width
            .parse::<usize>()
            .map_err(|_| format!("invalid width: {}", raw_width))?;
        let height = raw_height
            .parse::<usize>()
            .map_err(|_| format!("invalid height: {}", raw_height))?;

        Ok(Size { width, height })
    }
}

#[derive(Debug, Clone)]
pub struct Cell<D: Direction> {
    pub position: Position,
    pub visited: bool,
    /// Neighbours whose shared wall is still standing. Entries are only ever removed.
    neighbours: EnumMap<D, Option<CellId>>,
}

impl<D: Direction> Cell<D> {
    fn new(position: Position) -> Self {
        Self {
            position,
            visited: false,
            neighbours: EnumMap::default(),
        }
    }

    pub fn neighbour(&self, direction: D) -> Option<CellId> {
        self.neighbours[direction]
    }

    pub fn neighbour_count(&self) -> usize {
        self.neighbours.values().filter(|n| n.is_some()).count()
    }

    /// Remaining `(direction, neighbour)` entries, in direction order.
    pub fn neighbours(&self) -> Vec<(D, CellId)> {
        self.neighbours
            .iter()
            .filter_map(|(direction, neighbour)| neighbour.map(|id| (direction, id)))
            .collect()
    }
}

/// Cell arena for one maze instance. Built once; a new size or shape means a new grid.
#[derive(Debug, Clone)]
pub struct Grid<T: Topology> {
    cells: Vec<Cell<T::Direction>>,
    width: usize,
    height: usize,
}

pub struct GridIter<'a, T: Topology> {
    grid: &'a Grid<T>,
    pos: usize,
}

impl<T: Topology> Grid<T> {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            Err(MazeError::InvalidDimension { width, height })?
        }

        let mut cells = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new((x, y)));
            }
        }

        let mut grid = Self {
            cells,
            width,
            height,
        };

        // Link every touching pair once, from the cell with the higher id.
        for id in 0..grid.cells.len() {
            let position = grid.cells[id].position;

            for direction in T::Direction::all() {
                let other = match T::neighbour(position, direction, width, height) {
                    Some(other) => grid.id(other),
                    None => continue,
                };

                if other < id {
                    grid.cells[id].neighbours[direction] = Some(other);
                    grid.cells[other].neighbours[direction.opposite()] = Some(id);
                }
            }
        }

        debug!("Built {} grid of {}x{}", T::KIND, width, height);

        Ok(grid)
    }

    pub fn with_size(size: Size) -> Result<Self, MazeError> {
        Self::new(size.width, size.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    pub fn kind(&self) -> TopologyKind {
        T::KIND
    }

    pub fn iter(&self) -> GridIter<T> {
        GridIter { grid: self, pos: 0 }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell<T::Direction>> {
        self.id_of((x, y)).map(|id| &self.cells[id])
    }

    pub fn id_of(&self, (x, y): Position) -> Option<CellId> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(self.id((x, y)))
        }
    }

    pub fn position_of(&self, id: CellId) -> Position {
        (id % self.width, id / self.width)
    }

    /// # Panics
    ///
    /// If `id` does not belong to this grid.
    pub fn cell(&self, id: CellId) -> &Cell<T::Direction> {
        &self.cells[id]
    }

    pub fn neighbour_count(&self, position: Position) -> usize {
        self.get(position.0, position.1)
            .map_or(0, |cell| cell.neighbour_count())
    }

    pub fn neighbours(&self, position: Position) -> Vec<(T::Direction, Position)> {
        self.get(position.0, position.1)
            .map(|cell| {
                cell.neighbours()
                    .into_iter()
                    .map(|(direction, id)| (direction, self.position_of(id)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn unvisited_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.visited).count()
    }

    /// Carves the wall on `direction` out of `position`, dropping both mutual entries.
    /// Returns the position of the newly connected neighbour.
    pub fn connect(
        &mut self,
        position: Position,
        direction: T::Direction,
    ) -> Result<Position, MazeError> {
        let missing = MazeError::NoSuchNeighbour {
            x: position.0,
            y: position.1,
            direction: direction.name(),
        };

        let id = self.id_of(position).ok_or_else(|| missing.clone())?;
        let other = self.cells[id].neighbours[direction].ok_or(missing)?;

        self.cells[id].neighbours[direction] = None;
        self.cells[other].neighbours[direction.opposite()] = None;

        Ok(self.cells[other].position)
    }

    /// Drops a single side of an edge without carving it.
    pub(crate) fn forget(&mut self, id: CellId, direction: T::Direction) {
        self.cells[id].neighbours[direction] = None;
    }

    pub(crate) fn mark_visited(&mut self, id: CellId) {
        self.cells[id].visited = true;
    }

    fn id(&self, (x, y): Position) -> CellId {
        x + (y * self.width)
    }
}

impl<'a, T: Topology> IntoIterator for &'a Grid<T> {
    type Item = (usize, usize, &'a Cell<T::Direction>);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Topology> Iterator for GridIter<'a, T> {
    type Item = (usize, usize, &'a Cell<T::Direction>);

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.grid.cells.get(self.pos)?;

        self.pos += 1;

        Some((cell.position.0, cell.position.1, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{HexDirection, Hexagon, RectDirection, Rectangle};

    #[test]
    fn parse_size() {
        assert_eq!("20x15".parse::<Size>(), Ok(Size::new(20, 15)));
        assert!("20".parse::<Size>().is_err());
        assert!("ax2".parse::<Size>().is_err());
        assert!("-1x2".parse::<Size>().is_err());
        assert_eq!(Size::new(3, 4).area(), 12);
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::<Rectangle>::new(0, 3).unwrap_err(),
            MazeError::InvalidDimension {
                width: 0,
                height: 3
            }
        );
        assert!(Grid::<Hexagon>::new(3, 0).is_err());
    }

    #[test]
    fn rect_neighbour_counts() {
        let grid = Grid::<Rectangle>::new(3, 3).unwrap();

        assert_eq!(grid.size(), 9);
        assert_eq!(grid.neighbour_count((0, 0)), 2);
        assert_eq!(grid.neighbour_count((1, 0)), 3);
        assert_eq!(grid.neighbour_count((1, 1)), 4);

        let corner = grid.get(0, 0).unwrap();
        assert_eq!(corner.neighbour(RectDirection::Top), grid.id_of((0, 1)));
        assert_eq!(corner.neighbour(RectDirection::Right), grid.id_of((1, 0)));
        assert_eq!(corner.neighbour(RectDirection::Left), None);
        assert_eq!(corner.neighbour(RectDirection::Bottom), None);
    }

    #[test]
    fn hex_neighbour_counts() {
        let grid = Grid::<Hexagon>::new(4, 4).unwrap();

        assert_eq!(grid.neighbour_count((1, 1)), 6);
        assert_eq!(grid.neighbour_count((1, 2)), 6);
        // even bottom-left corner: right, top-right
        assert_eq!(grid.neighbour_count((0, 0)), 2);
        // odd row right edge: top-left, left, bottom-left
        assert_eq!(grid.neighbour_count((3, 1)), 3);
    }

    #[test]
    fn connect_removes_both_sides() {
        let mut grid = Grid::<Hexagon>::new(3, 3).unwrap();

        let before = grid.neighbour_count((1, 1));
        let other = grid.connect((1, 1), HexDirection::TopRight).unwrap();

        assert_eq!(other, (2, 2));
        assert_eq!(grid.neighbour_count((1, 1)), before - 1);
        assert_eq!(grid.get(1, 1).unwrap().neighbour(HexDirection::TopRight), None);
        assert_eq!(grid.get(2, 2).unwrap().neighbour(HexDirection::BottomLeft), None);

        assert_eq!(
            grid.connect((1, 1), HexDirection::TopRight),
            Err(MazeError::NoSuchNeighbour {
                x: 1,
                y: 1,
                direction: "top-right"
            })
        );
    }

    #[test]
    fn connect_rejects_boundary_and_out_of_range() {
        let mut grid = Grid::<Rectangle>::new(2, 2).unwrap();

        assert!(grid.connect((0, 0), RectDirection::Left).is_err());
        assert!(grid.connect((5, 5), RectDirection::Top).is_err());
    }

    #[test]
    fn iter_yields_positions_in_row_order() {
        let grid = Grid::<Rectangle>::new(2, 2).unwrap();
        let positions: Vec<Position> = grid.iter().map(|(x, y, _)| (x, y)).collect();

        assert_eq!(positions, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.unvisited_count(), 4);
    }

    #[test]
    fn neighbours_report_positions() {
        let mut grid = Grid::<Rectangle>::new(3, 2).unwrap();

        assert_eq!(
            grid.neighbours((1, 0)),
            vec![
                (RectDirection::Top, (1, 1)),
                (RectDirection::Right, (2, 0)),
                (RectDirection::Left, (0, 0)),
            ]
        );

        grid.connect((1, 0), RectDirection::Top).unwrap();

        assert_eq!(grid.neighbours((1, 1)).len(), 2);
        assert!(grid.neighbours((7, 7)).is_empty());
    }

    #[test]
    fn cloned_grid_is_independent() {
        let mut grid = Grid::<Hexagon>::new(2, 2).unwrap();
        let copy = grid.clone();

        grid.connect((0, 0), HexDirection::Right).unwrap();

        assert_eq!(grid.neighbour_count((0, 0)), copy.neighbour_count((0, 0)) - 1);
        assert_eq!(
            copy.get(0, 0).unwrap().neighbours(),
            vec![
                (HexDirection::TopRight, copy.id_of((0, 1)).unwrap()),
                (HexDirection::Right, copy.id_of((1, 0)).unwrap()),
            ]
        );
    }
}
