use super::layout::Point;
use super::{Floor, Layout, MazeState, Renderer};
use crate::events::MazeEvent;
use crate::grid::Grid;
use crate::topology::Direction;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use std::path::PathBuf;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const WALL: Rgb<u8> = Rgb([20, 20, 20]);
const FLOOR_UNVISITED: Rgb<u8> = Rgb([160, 160, 160]);
const FLOOR_VISITED: Rgb<u8> = Rgb([120, 170, 230]);
const FLOOR_DONE: Rgb<u8> = Rgb([245, 240, 225]);

/// Smallest cell edge, in pixels, that still leaves every polygon corner distinct.
pub const MIN_CELL_SIZE: u32 = 4;

/// Image file renderer that saves the final maze to disk
pub struct ImageRenderer<T: Layout> {
    output_path: PathBuf,
    cell_size: u32,
    state: Option<MazeState<T>>,
}

impl<T: Layout> ImageRenderer<T> {
    pub fn new(output_path: PathBuf, cell_size: u32) -> Self {
        Self {
            output_path,
            cell_size: cell_size.max(MIN_CELL_SIZE),
            state: None,
        }
    }

    pub fn draw(&self) -> Result<RgbImage, String> {
        let state = self.state.as_ref().ok_or("Renderer was not initialized")?;
        let scale = self.cell_size as f32;

        let (mut min, mut max) = ((f32::MAX, f32::MAX), (f32::MIN, f32::MIN));

        for y in 0..state.height() {
            for x in 0..state.width() {
                for (px, py) in T::corners((x, y)) {
                    min = (min.0.min(px), min.1.min(py));
                    max = (max.0.max(px), max.1.max(py));
                }
            }
        }

        // half a cell of margin on every side; image rows grow downwards
        let to_pixels = |(x, y): Point| -> Point {
            ((x - min.0 + 0.5) * scale, (max.1 - y + 0.5) * scale)
        };

        let width = ((max.0 - min.0 + 1.0) * scale).ceil() as u32;
        let height = ((max.1 - min.1 + 1.0) * scale).ceil() as u32;

        let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

        for y in 0..state.height() {
            for x in 0..state.width() {
                let colour = match state.floor((x, y)) {
                    Floor::Unvisited => FLOOR_UNVISITED,
                    Floor::Visited => FLOOR_VISITED,
                    Floor::Done => FLOOR_DONE,
                };

                let outline: Vec<imageproc::point::Point<i32>> = T::corners((x, y))
                    .into_iter()
                    .map(|corner| {
                        let (px, py) = to_pixels(corner);
                        imageproc::point::Point::new(px.round() as i32, py.round() as i32)
                    })
                    .collect();

                draw_polygon_mut(&mut canvas, &outline, colour);
            }
        }

        for y in 0..state.height() {
            for x in 0..state.width() {
                for direction in T::Direction::all() {
                    if state.has_wall((x, y), direction) {
                        let (start, end) = T::wall((x, y), direction);

                        draw_line_segment_mut(&mut canvas, to_pixels(start), to_pixels(end), WALL);
                    }
                }
            }
        }

        Ok(canvas)
    }
}

impl<T: Layout> Renderer<T> for ImageRenderer<T> {
    type Error = String;

    fn initialize(&mut self, grid: &Grid<T>) -> Result<(), Self::Error> {
        self.state = Some(MazeState::for_grid(grid));

        Ok(())
    }

    fn handle_event(&mut self, event: &MazeEvent<T::Direction>) -> Result<(), Self::Error> {
        self.state
            .as_mut()
            .ok_or("Renderer was not initialized")?
            .apply(event);

        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        self.draw()?
            .save(&self.output_path)
            .map_err(|e| format!("Failed to save image: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MazeGenerator;
    use crate::topology::{Hexagon, Rectangle};

    fn render<T: Layout>(width: usize, height: usize, cell_size: u32) -> RgbImage {
        let mut generator = MazeGenerator::seeded(Grid::<T>::new(width, height).unwrap(), 8);
        let mut renderer = ImageRenderer::<T>::new(PathBuf::from("unused.png"), cell_size);

        renderer.initialize(generator.grid()).unwrap();

        for event in generator.drain_all().unwrap() {
            renderer.handle_event(&event).unwrap();
        }

        renderer.draw().unwrap()
    }

    #[test]
    fn rectangle_image_size() {
        let image = render::<Rectangle>(4, 3, 10);

        assert_eq!(image.dimensions(), (50, 40));
        // the outer boundary always stays walled
        assert_eq!(*image.get_pixel(5, 20), WALL);
    }

    #[test]
    fn hexagon_image_is_drawn() {
        let image = render::<Hexagon>(3, 3, 20);
        let (width, height) = image.dimensions();

        assert!(width > 3 * 17);
        assert!(height > 2 * 15);
        assert!(image.pixels().any(|pixel| *pixel == FLOOR_DONE));
    }

    #[test]
    fn cell_size_is_clamped() {
        let renderer = ImageRenderer::<Rectangle>::new(PathBuf::from("unused.png"), 1);

        assert_eq!(renderer.cell_size, MIN_CELL_SIZE);
    }
}
