//! Geometry for drawing cells, in cell units with y pointing up.

use crate::grid::Position;
use crate::render::state::{Floor, MazeState};
use crate::topology::{Direction, HexDirection, Hexagon, RectDirection, Rectangle, Topology};

pub type Point = (f32, f32);

/// Horizontal and vertical distance between hexagon centres (pointy top, radius 0.5).
pub const HEX_PITCH: Point = (0.86, 0.75);

pub trait Layout: Topology {
    fn centre(position: Position) -> Point;

    /// Cell outline, ordered so the wall on direction `d` runs from `corners[d]` to
    /// `corners[d + 1]`.
    fn corners(position: Position) -> Vec<Point>;

    fn wall(position: Position, direction: Self::Direction) -> (Point, Point) {
        let corners = Self::corners(position);
        let index = direction.index();

        (corners[index], corners[(index + 1) % corners.len()])
    }

    /// Terminal drawing of the maze, for shapes that fit a character grid.
    fn ascii(_state: &MazeState<Self>) -> Option<String> {
        None
    }
}

impl Layout for Rectangle {
    fn centre((x, y): Position) -> Point {
        (x as f32 + 0.5, y as f32 + 0.5)
    }

    fn corners((x, y): Position) -> Vec<Point> {
        let (left, bottom) = (x as f32, y as f32);

        vec![
            (left, bottom + 1.0),
            (left + 1.0, bottom + 1.0),
            (left + 1.0, bottom),
            (left, bottom),
        ]
    }

    fn ascii(state: &MazeState<Self>) -> Option<String> {
        let mut output = String::new();

        for y in (0..state.height()).rev() {
            for x in 0..state.width() {
                output.push('+');
                output.push_str(if state.has_wall((x, y), RectDirection::Top) {
                    "---"
                } else {
                    "   "
                });
            }
            output.push_str("+\n");

            for x in 0..state.width() {
                output.push(if state.has_wall((x, y), RectDirection::Left) {
                    '|'
                } else {
                    ' '
                });
                output.push_str(floor_mark(state, (x, y)));
            }
            output.push(
                if state.has_wall((state.width() - 1, y), RectDirection::Right) {
                    '|'
                } else {
                    ' '
                },
            );
            output.push('\n');
        }

        for x in 0..state.width() {
            output.push('+');
            output.push_str(if state.has_wall((x, 0), RectDirection::Bottom) {
                "---"
            } else {
                "   "
            });
        }
        output.push('+');

        Some(output)
    }
}

fn floor_mark<T: Topology>(state: &MazeState<T>, position: Position) -> &'static str {
    if state.is_complete() {
        return "   ";
    }

    match state.floor(position) {
        Floor::Unvisited => " . ",
        Floor::Visited => " o ",
        Floor::Done => "   ",
    }
}

impl Layout for Hexagon {
    fn centre((x, y): Position) -> Point {
        let shift = if y % 2 == 1 { HEX_PITCH.0 / 2.0 } else { 0.0 };

        (x as f32 * HEX_PITCH.0 + shift, y as f32 * HEX_PITCH.1)
    }

    fn corners(position: Position) -> Vec<Point> {
        let (cx, cy) = Self::centre(position);
        let (half_width, quarter) = (HEX_PITCH.0 / 2.0, 0.25);

        // starts at the upper-left vertex, clockwise
        HexDirection::all()
            .map(|direction| match direction {
                HexDirection::TopLeft => (cx - half_width, cy + quarter),
                HexDirection::TopRight => (cx, cy + 2.0 * quarter),
                HexDirection::Right => (cx + half_width, cy + quarter),
                HexDirection::BottomRight => (cx + half_width, cy - quarter),
                HexDirection::BottomLeft => (cx, cy - 2.0 * quarter),
                HexDirection::Left => (cx - half_width, cy - quarter),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MazeEvent;

    fn close(a: Point, b: Point) -> bool {
        (a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5
    }

    fn assert_shared_walls<T: Layout>(width: usize, height: usize) {
        for y in 0..height {
            for x in 0..width {
                for direction in T::Direction::all() {
                    if let Some(other) = T::neighbour((x, y), direction, width, height) {
                        let (a, b) = T::wall((x, y), direction);
                        let (c, d) = T::wall(other, direction.opposite());

                        assert!(close(a, d) && close(b, c), "({}, {}) {}", x, y, direction);
                    }
                }
            }
        }
    }

    #[test]
    fn neighbours_share_wall_segments() {
        assert_shared_walls::<Rectangle>(3, 3);
        assert_shared_walls::<Hexagon>(4, 4);
    }

    #[test]
    fn odd_hex_rows_are_shifted() {
        let even = Hexagon::centre((1, 0));
        let odd = Hexagon::centre((1, 1));

        assert!(close(even, (0.86, 0.0)));
        assert!(close(odd, (1.29, 0.75)));
    }

    #[test]
    fn ascii_rectangle() {
        let mut state = MazeState::<Rectangle>::new(2, 1);

        state.apply(&MazeEvent::WallRemoved {
            from: (0, 0),
            to: (1, 0),
            from_direction: RectDirection::Right,
            to_direction: RectDirection::Left,
        });
        state.apply(&MazeEvent::GenerationComplete);

        assert_eq!(
            Rectangle::ascii(&state).unwrap(),
            "+---+---+\n|       |\n+---+---+"
        );
    }

    #[test]
    fn ascii_marks_progress() {
        let mut state = MazeState::<Rectangle>::new(2, 1);

        state.apply(&MazeEvent::CellVisited {
            cell: (1, 0),
            first_visit: true,
        });

        assert_eq!(
            Rectangle::ascii(&state).unwrap(),
            "+---+---+\n| . | o |\n+---+---+"
        );
        assert_eq!(Hexagon::ascii(&MazeState::new(2, 2)), None);
    }
}
