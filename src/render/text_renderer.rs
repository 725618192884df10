use std::io::{self, Write};

use log::warn;

use super::{Layout, MazeState, Renderer};
use crate::events::MazeEvent;
use crate::grid::Grid;

/// Prints the maze as ASCII art once finished, or after every event when `live`.
pub struct TextRenderer<T: Layout, W: Write = io::Stdout> {
    state: Option<MazeState<T>>,
    out: W,
    live: bool,
}

impl<T: Layout> TextRenderer<T> {
    pub fn new(live: bool) -> Self {
        Self::with_writer(io::stdout(), live)
    }
}

impl<T: Layout, W: Write> TextRenderer<T, W> {
    pub fn with_writer(out: W, live: bool) -> Self {
        Self {
            state: None,
            out,
            live,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, clear: bool) -> Result<(), String> {
        let art = match self.state.as_ref().and_then(T::ascii) {
            Some(art) => art,
            None => return Ok(()),
        };

        if clear {
            // home the cursor and clear the screen
            write!(self.out, "\x1b[2J\x1b[H").map_err(|e| e.to_string())?;
        }

        writeln!(self.out, "{}", art).map_err(|e| format!("Failed to print maze: {}", e))?;
        self.out.flush().map_err(|e| e.to_string())
    }
}

impl<T: Layout, W: Write> Renderer<T> for TextRenderer<T, W> {
    type Error = String;

    fn initialize(&mut self, grid: &Grid<T>) -> Result<(), Self::Error> {
        let state = MazeState::for_grid(grid);

        if T::ascii(&state).is_none() {
            warn!("Text output is not available for {} mazes", T::KIND);
        }

        self.state = Some(state);

        Ok(())
    }

    fn handle_event(&mut self, event: &MazeEvent<T::Direction>) -> Result<(), Self::Error> {
        let state = self.state.as_mut().ok_or("Renderer was not initialized")?;

        state.apply(event);

        if self.live {
            self.draw(true)?;
        }

        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        if self.live {
            Ok(())
        } else {
            self.draw(false)
        }
    }
}
