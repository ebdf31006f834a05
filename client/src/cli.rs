use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use common::{
    constants::{DEFAULT_FOV_DEGREES, DEFAULT_MAZE_SIZE},
    maze::{Algorithm, Maze, MazeError},
};

#[derive(Parser, Debug)]
#[command(
    name = "mazecaster",
    version,
    about = "Walk through a procedurally generated maze in the terminal"
)]
pub struct Cli {
    /// Side length of the maze in cells (odd sizes give even walls)
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAZE_SIZE)]
    pub size: usize,

    /// Seed for maze generation; a random one is logged when omitted
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Carving algorithm
    #[arg(short, long, global = true, value_enum, default_value_t = AlgorithmArg::Prim)]
    pub algorithm: AlgorithmArg,

    /// Horizontal field of view in degrees
    #[arg(long, global = true, default_value_t = DEFAULT_FOV_DEGREES)]
    pub fov: f32,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Explore the maze interactively (default)
    Play,
    /// Print the maze layout and exit
    Map,
    /// Print a single rendered view from the start position and exit
    Frame {
        #[arg(long, default_value_t = 80)]
        width: u16,
        #[arg(long, default_value_t = 24)]
        height: u16,
        /// View direction in degrees, overriding the spawn heading
        #[arg(long)]
        heading: Option<f32>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    Prim,
    Backtrack,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Prim => Algorithm::Prim,
            AlgorithmArg::Backtrack => Algorithm::Backtrack,
        }
    }
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }

    pub fn build_maze(&self) -> Result<Maze, MazeError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        info!(seed, size = self.size, algorithm = ?self.algorithm, "generating maze");

        let mut rng = StdRng::seed_from_u64(seed);
        Maze::with_algorithm(self.size, self.algorithm.into(), &mut rng)
    }
}
