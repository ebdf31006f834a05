use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Vec2, vec2};

use crate::{
    constants::{MOUSE_SENSITIVITY, PLAYER_SPEED},
    maze::{Maze, MazeError},
    raycast::Pose,
};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub yaw_delta: f32,
}

impl PlayerInput {
    /// Adds a horizontal pointer movement, in pixels, to this tick's turn.
    pub fn turn(&mut self, pixels: f32) {
        self.yaw_delta += pixels * MOUSE_SENSITIVITY;
    }

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right) && self.yaw_delta == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pose: Pose,
    pub speed: f32,
}

impl Player {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            speed: PLAYER_SPEED,
        }
    }

    /// Stands in the middle of the maze's start cell, facing an open neighbour.
    pub fn spawn(maze: &Maze) -> Result<Self, MazeError> {
        let (x, y) = maze.find_start()?;
        let position = maze.cell_center(x, y);
        Ok(Self::new(Pose::new(position, open_heading(maze, x, y))))
    }

    /// Applies one tick of input. Returns whether the pose changed.
    pub fn update(&mut self, maze: &Maze, input: &PlayerInput) -> bool {
        let mut changed = false;

        if input.yaw_delta != 0.0 {
            self.pose.heading = (self.pose.heading + input.yaw_delta).rem_euclid(TAU);
            changed = true;
        }

        let forward = self.pose.direction();
        let right = vec2(-forward.y, forward.x); // Heading + 90°.

        if input.forward {
            changed |= self.step(maze, forward);
        }
        if input.backward {
            changed |= self.step(maze, -forward);
        }
        if input.right {
            changed |= self.step(maze, right);
        }
        if input.left {
            changed |= self.step(maze, -right);
        }

        changed
    }

    // Moves one stride, unless that would end inside a wall.
    fn step(&mut self, maze: &Maze, direction: Vec2) -> bool {
        let next = self.pose.position + direction * self.speed;
        if maze.is_blocked_at(next) {
            return false;
        }
        self.pose.position = next;
        true
    }
}

fn open_heading(maze: &Maze, x: usize, y: usize) -> f32 {
    let (x, y) = (x as isize, y as isize);
    let headings = [
        ((1, 0), 0.0),
        ((0, 1), FRAC_PI_2),
        ((-1, 0), PI),
        ((0, -1), 3.0 * FRAC_PI_2),
    ];

    headings
        .into_iter()
        .find(|&((dx, dy), _)| !maze.is_blocked(x + dx, y + dy))
        .map_or(0.0, |(_, heading)| heading)
}
