pub mod algorithms;

use rand::prelude::{IndexedRandom, Rng};
use tracing::debug;

use super::{Maze, MazeError, Tile};
use crate::constants::MIN_MAZE_SIZE;
use algorithms::{backtrack::Backtrack, prim::Prim};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Prim, // More dead ends, short branches.
    Backtrack, // More long corridors.
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    // Every carving starts here, so it has to be a room for any valid size.
    pub const ORIGIN: Cell = Cell { x: 1, y: 1 };

    pub fn new(x: usize, y: usize) -> Cell {
        Cell { x, y }
    }

    /// The wall cell halfway between two rooms a jump apart.
    pub fn midpoint(&self, other: Cell) -> Cell {
        Cell {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }
}

pub struct MazeMaker<'a, R: Rng> {
    pub maze: Maze,
    pub rng: &'a mut R,
    size: usize,
}

impl<'a, R: Rng> MazeMaker<'a, R> {
    pub fn generate(size: usize, algorithm: Algorithm, rng: &'a mut R) -> Result<Maze, MazeError> {
        if size < MIN_MAZE_SIZE {
            return Err(MazeError::InvalidSize(size));
        }

        let mut maker = MazeMaker {
            maze: Maze::blocked(size),
            rng,
            size,
        };

        match algorithm {
            Algorithm::Prim => maker.prim(),
            Algorithm::Backtrack => maker.backtrack(),
        }

        // The outer ring stays sealed whatever the carving reached.
        maker.maze.seal_border();

        debug!(
            size,
            ?algorithm,
            passable = maker.maze.passable_count(),
            "generated maze"
        );

        Ok(maker.maze)
    }

    /// Rooms two cells away in each direction that stay off the border.
    fn get_jumps(&self, cell: Cell) -> Vec<Cell> {
        let directions = [(0, 2), (0, -2), (2, 0), (-2, 0)];
        let mut jumps = Vec::with_capacity(directions.len());

        for (dx, dy) in directions {
            let nx = cell.x as isize + dx;
            let ny = cell.y as isize + dy;

            let in_bounds =
                nx > 0 && nx < self.size as isize - 1 && ny > 0 && ny < self.size as isize - 1;
            if in_bounds {
                jumps.push(Cell::new(nx as usize, ny as usize));
            }
        }

        jumps
    }

    fn pick_uncarved_jump(&mut self, cell: Cell) -> Option<Cell> {
        let jumps: Vec<Cell> = self
            .get_jumps(cell)
            .into_iter()
            .filter(|&jump| !self.is_carved(jump))
            .collect();

        jumps.choose(&mut *self.rng).copied()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn carve(&mut self, cell: Cell) {
        self.maze.set(cell.x, cell.y, Tile::Passable);
    }

    fn carve_between(&mut self, cell_1: Cell, cell_2: Cell) {
        self.carve(cell_1.midpoint(cell_2));
    }

    fn is_carved(&self, cell: Cell) -> bool {
        self.maze.tile(cell.x, cell.y) == Some(Tile::Passable)
    }
}
