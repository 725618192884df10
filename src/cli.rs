use maze_generator::{Size, TopologyKind};
use std::path::PathBuf;
use std::time::Duration;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug)]
pub struct RendererConfig {
    pub ascii: bool,
    pub live: bool,
    pub events_path: Option<PathBuf>,
    #[cfg(feature = "image")]
    pub output_path: Option<PathBuf>,
    #[cfg(feature = "image")]
    pub cell_size: u32,
}

#[derive(Debug)]
pub struct AppConfig {
    pub size: Size,
    pub topology: TopologyKind,
    pub seed: Option<u64>,
    /// Pause between steps; `None` generates as fast as possible.
    pub interval: Option<Duration>,
    pub renderer: RendererConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "maze-generator",
    about = "Generate perfect mazes on rectangle or hexagon grids"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "20x20",
        help = "Maze size in cells"
    )]
    size: Size,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "rectangle",
        help = "Cell shape: rectangle or hexagon"
    )]
    topology: TopologyKind,

    #[structopt(parse(try_from_str), long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(
        short,
        long = "interval-ms",
        help = "Milliseconds to wait between steps, for watching the generation"
    )]
    interval: Option<u64>,

    #[structopt(long, help = "Redraw the maze after every step")]
    live: bool,

    #[structopt(long, help = "Do not print the finished maze")]
    no_ascii: bool,

    #[structopt(parse(from_os_str), long, help = "Write the event trace as JSON")]
    events: Option<PathBuf>,

    #[cfg(feature = "image")]
    #[structopt(parse(from_os_str), short, long, help = "Write the finished maze to a PNG file")]
    output: Option<PathBuf>,

    #[cfg(feature = "image")]
    #[structopt(long, default_value = "16", help = "Cell size in pixels for the PNG output")]
    cell_size: u32,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        if self.live && self.no_ascii {
            Err("--live redraws the ascii maze and cannot be combined with --no-ascii")?
        }

        Ok(AppConfig {
            size: self.size,
            topology: self.topology,
            seed: self.seed,
            interval: self.interval.map(Duration::from_millis),
            renderer: RendererConfig {
                ascii: !self.no_ascii,
                live: self.live,
                events_path: self.events,
                #[cfg(feature = "image")]
                output_path: self.output,
                #[cfg(feature = "image")]
                cell_size: self.cell_size,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Opt::from_iter(&["maze-generator"]).to_app_config().unwrap();

        assert_eq!(config.size, Size::new(20, 20));
        assert_eq!(config.topology, TopologyKind::Rectangle);
        assert_eq!(config.interval, None);
        assert!(config.renderer.ascii);
        assert!(!config.renderer.live);
    }

    #[test]
    fn parses_options() {
        let config = Opt::from_iter(&[
            "maze-generator",
            "--size",
            "7x5",
            "--topology",
            "hex",
            "--seed",
            "42",
            "-i",
            "30",
        ])
        .to_app_config()
        .unwrap();

        assert_eq!(config.size, Size::new(7, 5));
        assert_eq!(config.topology, TopologyKind::Hexagon);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.interval, Some(Duration::from_millis(30)));
    }

    #[test]
    fn rejects_unknown_topology() {
        assert!(Opt::from_iter_safe(&["maze-generator", "-t", "triangle"]).is_err());
    }

    #[test]
    fn live_needs_ascii() {
        let opt = Opt::from_iter(&["maze-generator", "--live", "--no-ascii"]);

        assert!(opt.to_app_config().is_err());
    }
}
