pub mod maker;

use std::fmt;

use glam::{Vec2, vec2};
use rand::Rng;
use thiserror::Error;

use crate::constants::MIN_MAZE_SIZE;
pub use maker::Algorithm;
use maker::MazeMaker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Passable,
    Blocked,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze size must be at least {min}, got {0}", min = MIN_MAZE_SIZE)]
    InvalidSize(usize),
    #[error("maze rows must all be {size} cells long, row {row} has {len}")]
    NotSquare { size: usize, row: usize, len: usize },
    #[error("maze has no passable cell to start from")]
    NoPassableCell,
}

/// Square occupancy grid. Filled in once by [`MazeMaker`] and read-only afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    size: usize,
    tiles: Vec<Tile>, // Row-major: `tiles[y * size + x]`.
}

impl Maze {
    /// Carves a maze with randomized Prim's algorithm.
    pub fn generate<R: Rng>(size: usize, rng: &mut R) -> Result<Self, MazeError> {
        MazeMaker::generate(size, Algorithm::Prim, rng)
    }

    pub fn with_algorithm<R: Rng>(
        size: usize,
        algorithm: Algorithm,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        MazeMaker::generate(size, algorithm, rng)
    }

    /// Builds a maze from rows of `0` (passable) and nonzero (blocked) cells.
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Self, MazeError> {
        let size = grid.len();
        if size < MIN_MAZE_SIZE {
            return Err(MazeError::InvalidSize(size));
        }

        let mut tiles = Vec::with_capacity(size * size);
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != size {
                return Err(MazeError::NotSquare {
                    size,
                    row,
                    len: cells.len(),
                });
            }
            tiles.extend(cells.iter().map(|&cell| {
                if cell == 0 {
                    Tile::Passable
                } else {
                    Tile::Blocked
                }
            }));
        }

        Ok(Self { size, tiles })
    }

    pub(crate) fn blocked(size: usize) -> Self {
        Self {
            size,
            tiles: vec![Tile::Blocked; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.tiles[y * self.size + x])
    }

    /// Anything outside the grid counts as blocked.
    pub fn is_blocked(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        self.tile(x as usize, y as usize) != Some(Tile::Passable)
    }

    pub fn is_blocked_at(&self, point: Vec2) -> bool {
        self.is_blocked(point.x.floor() as isize, point.y.floor() as isize)
    }

    pub fn passable_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == Tile::Passable).count()
    }

    /// First passable cell, scanning columns left to right and each column top to bottom.
    pub fn find_start(&self) -> Result<(usize, usize), MazeError> {
        for x in 0..self.size {
            for y in 0..self.size {
                if self.tile(x, y) == Some(Tile::Passable) {
                    return Ok((x, y));
                }
            }
        }
        Err(MazeError::NoPassableCell)
    }

    pub fn cell_center(&self, x: usize, y: usize) -> Vec2 {
        vec2(x as f32 + 0.5, y as f32 + 0.5)
    }

    pub fn log(&self) -> String {
        self.tiles
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|&tile| match tile {
                        Tile::Passable => "  ",
                        Tile::Blocked => "██",
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.tiles[y * self.size + x] = tile;
    }

    pub(crate) fn seal_border(&mut self) {
        let last = self.size - 1;
        for i in 0..self.size {
            self.set(i, 0, Tile::Blocked);
            self.set(i, last, Tile::Blocked);
            self.set(0, i, Tile::Blocked);
            self.set(last, i, Tile::Blocked);
        }
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    const SIZES: [usize; 6] = [5, 6, 7, 20, 21, 31];

    #[test]
    fn test_prim_mazes_are_spanning_trees() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for size in SIZES {
                let maze = Maze::generate(size, &mut rng).expect("size should be valid");
                assert_is_spanning_tree(&maze);
            }
        }
    }

    #[test]
    fn test_backtrack_mazes_are_spanning_trees() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for size in SIZES {
                let maze = Maze::with_algorithm(size, Algorithm::Backtrack, &mut rng)
                    .expect("size should be valid");
                assert_is_spanning_tree(&maze);
            }
        }
    }

    #[test]
    fn test_outer_ring_is_always_blocked() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in SIZES {
            for algorithm in [Algorithm::Prim, Algorithm::Backtrack] {
                let maze = Maze::with_algorithm(size, algorithm, &mut rng).unwrap();
                let last = size - 1;
                for i in 0..size {
                    for (x, y) in [(i, 0), (i, last), (0, i), (last, i)] {
                        assert_eq!(
                            maze.tile(x, y),
                            Some(Tile::Blocked),
                            "border cell ({x}, {y}) should be blocked:\n{maze}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_odd_maze_carves_every_room() {
        let mut rng = StdRng::seed_from_u64(3);
        let maze = Maze::generate(21, &mut rng).unwrap();

        for y in (1..20).step_by(2) {
            for x in (1..20).step_by(2) {
                assert_eq!(maze.tile(x, y), Some(Tile::Passable), "room ({x}, {y})");
            }
        }
        // 100 rooms plus the 99 walls joining them.
        assert_eq!(maze.passable_count(), 199);
    }

    #[test]
    fn test_same_seed_gives_same_maze() {
        let a = Maze::generate(31, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Maze::generate(31, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_sizes_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for size in 0..MIN_MAZE_SIZE {
            assert_eq!(
                Maze::generate(size, &mut rng),
                Err(MazeError::InvalidSize(size))
            );
        }
    }

    #[test]
    fn test_from_grid_rejects_ragged_rows() {
        let grid = vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 0, 1, 0],
            vec![1, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1],
        ];
        assert_eq!(
            Maze::from_grid(&grid),
            Err(MazeError::NotSquare {
                size: 5,
                row: 2,
                len: 4
            })
        );
    }

    #[test]
    fn test_find_start_returns_only_passable_cell() {
        let mut grid = vec![vec![1; 7]; 7];
        grid[4][3] = 0; // (x = 3, y = 4).
        let maze = Maze::from_grid(&grid).unwrap();
        assert_eq!(maze.find_start(), Ok((3, 4)));
    }

    #[test]
    fn test_find_start_scans_columns_before_rows() {
        let mut grid = vec![vec![1; 7]; 7];
        grid[1][4] = 0; // (x = 4, y = 1): first in row-major order.
        grid[5][2] = 0; // (x = 2, y = 5): first in column-major order.
        let maze = Maze::from_grid(&grid).unwrap();
        assert_eq!(maze.find_start(), Ok((2, 5)));
    }

    #[test]
    fn test_find_start_on_generated_maze_is_origin() {
        let maze = Maze::generate(21, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(maze.find_start(), Ok((1, 1)));
    }

    #[test]
    fn test_find_start_fails_on_solid_grid() {
        let maze = Maze::from_grid(&vec![vec![1; 5]; 5]).unwrap();
        assert_eq!(maze.find_start(), Err(MazeError::NoPassableCell));
    }

    #[test]
    fn test_is_blocked_treats_outside_as_blocked() {
        let maze = Maze::from_grid(&vec![vec![0; 5]; 5]).unwrap();
        assert!(!maze.is_blocked(0, 0));
        assert!(!maze.is_blocked(4, 4));
        assert!(maze.is_blocked(-1, 2));
        assert!(maze.is_blocked(2, -1));
        assert!(maze.is_blocked(5, 2));
        assert!(maze.is_blocked(2, 5));
        assert!(maze.is_blocked_at(vec2(-0.01, 2.5)));
        assert!(!maze.is_blocked_at(vec2(0.0, 2.5)));
    }

    #[test]
    fn test_log_draws_walls_and_spaces() {
        let mut grid = vec![vec![1; 5]; 5];
        grid[2][1] = 0;
        grid[2][2] = 0;
        let maze = Maze::from_grid(&grid).unwrap();
        let log = maze.log();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "██    ████");
    }

    // Under 4-adjacency a connected set of cells with exactly one fewer
    // adjacent pair than cells has no cycles.
    fn assert_is_spanning_tree(maze: &Maze) {
        let size = maze.size();
        let passable = |x: usize, y: usize| maze.tile(x, y) == Some(Tile::Passable);

        let total = maze.passable_count();
        assert!(total > 0, "maze should have some spaces:\n{maze}");
        let start = maze.find_start().expect("there should be a start");

        let mut edges = 0;
        for y in 0..size {
            for x in 0..size {
                if !passable(x, y) {
                    continue;
                }
                if passable(x + 1, y) {
                    edges += 1;
                }
                if passable(x, y + 1) {
                    edges += 1;
                }
            }
        }
        assert_eq!(edges, total - 1, "maze should have no cycles:\n{maze}");

        let mut visited = vec![false; size * size];
        let mut queue = VecDeque::from([start]);
        visited[start.1 * size + start.0] = true;
        let mut visited_count = 0;

        while let Some((x, y)) = queue.pop_front() {
            visited_count += 1;
            for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if maze.is_blocked(nx, ny) {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !visited[ny * size + nx] {
                    visited[ny * size + nx] = true;
                    queue.push_back((nx, ny));
                }
            }
        }

        assert_eq!(
            visited_count, total,
            "all spaces should be connected:\n{maze}"
        );
    }
}
