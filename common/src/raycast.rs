use glam::{Vec2, vec2};

use crate::{
    constants::{RAY_STEPS, RAY_SUBSTEPS},
    maze::Maze,
};

pub const SUBSTEP_LENGTH: f32 = 1.0 / RAY_SUBSTEPS as f32;
pub const MAX_RAY_LENGTH: f32 = RAY_STEPS as f32;

/// Where the viewer stands and which way they face. `heading` is in radians,
/// measured from the +x axis towards +y, and is not normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub heading: f32,
}

impl Pose {
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    pub fn direction(&self) -> Vec2 {
        vec2(self.heading.cos(), self.heading.sin())
    }
}

/// Marches a ray from `origin` in fixed sub-steps until it leaves the maze or
/// enters a blocked cell, and returns the straight-line distance travelled.
///
/// Each sub-step moves along x and tests, then along y and tests, so a ray can
/// stop with only its x component advanced. Rays that hit nothing within
/// [`MAX_RAY_LENGTH`] stop at their last sample.
pub fn cast(origin: Vec2, angle: f32, maze: &Maze) -> f32 {
    let step = vec2(angle.cos(), angle.sin()) * SUBSTEP_LENGTH;
    let mut sample = origin;

    for _ in 0..RAY_STEPS * RAY_SUBSTEPS {
        sample.x += step.x;
        if maze.is_blocked_at(sample) {
            break;
        }

        sample.y += step.y;
        if maze.is_blocked_at(sample) {
            break;
        }
    }

    sample.distance(origin)
}
