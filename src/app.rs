use crate::cli::AppConfig;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use maze_generator::render::trace_renderer::TraceRenderer;
use maze_generator::render::{Layout, LogRenderer, Renderer, TextRenderer};
use maze_generator::{Grid, Hexagon, MazeGenerator, Rectangle, TopologyKind};
use rand::rngs::OsRng;
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

#[cfg(feature = "image")]
use maze_generator::render::image_renderer::ImageRenderer;

type BoxedRenderer<T> = Box<dyn Renderer<T, Error = String>>;

pub struct MazeApp {
    config: AppConfig,
}

impl MazeApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self.config.topology {
            TopologyKind::Rectangle => self.generate::<Rectangle>(),
            TopologyKind::Hexagon => self.generate::<Hexagon>(),
        }
    }

    fn generate<T>(&self) -> Result<(), Box<dyn std::error::Error>>
    where
        T: Layout,
        T::Direction: Serialize,
    {
        let grid = Grid::<T>::with_size(self.config.size)?;

        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());

        info!("Using seed: {}", seed);

        let mut generator = MazeGenerator::seeded(grid, seed);
        let mut renderers = self.create_renderers::<T>();

        for renderer in &mut renderers {
            renderer.initialize(generator.grid())?;
        }

        // Progress bar
        let max_progress = generator.remaining() as u64;
        let progress = if self.config.renderer.live {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(max_progress)
        };
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len} {per_sec:>12}",
                )?
                .progress_chars("#>-"),
        );

        // Main generation loop
        while !generator.is_complete() {
            let outcome = generator.step()?;

            for event in &outcome.events {
                for renderer in &mut renderers {
                    renderer.handle_event(event)?;
                }
            }

            progress.set_position(max_progress - generator.remaining() as u64);

            if let Some(interval) = self.config.interval {
                std::thread::sleep(interval);
            }
        }

        progress.finish_and_clear();

        for renderer in &mut renderers {
            renderer.finalize()?;
        }

        info!("Generation completed");
        Ok(())
    }

    fn create_renderers<T>(&self) -> Vec<BoxedRenderer<T>>
    where
        T: Layout,
        T::Direction: Serialize,
    {
        let config = &self.config.renderer;
        let mut renderers: Vec<BoxedRenderer<T>> = vec![Box::new(LogRenderer::new())];

        if config.ascii {
            renderers.push(Box::new(TextRenderer::<T>::new(config.live)));
        }

        if let Some(events_path) = &config.events_path {
            renderers.push(Box::new(TraceRenderer::<T>::new(events_path.clone())));
        }

        // Add image renderer if output path is specified
        #[cfg(feature = "image")]
        if let Some(output_path) = &config.output_path {
            renderers.push(Box::new(ImageRenderer::<T>::new(
                output_path.clone(),
                config.cell_size,
            )));
        }

        renderers
    }
}
