use std::iter::FusedIterator;

use tracing::trace;

use crate::{
    constants::{
        DEFAULT_COLUMNS, DEFAULT_FOV_DEGREES, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
        MAX_RENDER_DISTANCE, MIN_DISTANCE, SHADE_STEP,
    },
    maze::Maze,
    raycast::{self, Pose},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const PHOSPHOR: Rgb = Rgb::new(85, 255, 85);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fades towards black as `distance` approaches `max_distance`, in coarse
    /// steps of [`SHADE_STEP`] per channel.
    pub fn shade(self, distance: f32, max_distance: f32) -> Rgb {
        let brightness = 1.0 - distance / max_distance;
        let channel = |value: u8| {
            let banded = (value as f32 * brightness / SHADE_STEP).floor() * SHADE_STEP;
            banded.clamp(0.0, 255.0) as u8
        };

        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// One vertical slice of the view, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub screen_x: f32,
    pub distance: f32,
    pub draw_start: f32,
    pub draw_end: f32,
    pub color: Rgb,
}

impl Column {
    pub fn line_height(&self) -> f32 {
        self.draw_end - self.draw_start
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub fov_degrees: f32,
    pub columns: usize,
    pub viewport: Viewport,
    pub near_color: Rgb,
    pub max_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            columns: DEFAULT_COLUMNS,
            viewport: Viewport::default(),
            near_color: Rgb::PHOSPHOR,
            max_distance: MAX_RENDER_DISTANCE,
        }
    }
}

impl Camera {
    /// Sweeps the field of view left to right, one ray per column.
    ///
    /// Nothing is cast until the returned iterator is advanced, and the
    /// iterator can be cloned to replay the rest of the sweep.
    pub fn project<'a>(&'a self, pose: &Pose, maze: &'a Maze) -> Columns<'a> {
        trace!(
            x = pose.position.x,
            y = pose.position.y,
            heading = pose.heading,
            columns = self.columns,
            "projecting view"
        );

        Columns {
            camera: self,
            maze,
            pose: *pose,
            next: 0,
        }
    }

    pub fn ray_angle(&self, heading: f32, index: usize) -> f32 {
        let spread = self.fov_degrees / self.columns as f32;
        (index as f32 * spread).to_radians() + (heading - (self.fov_degrees / 2.0).to_radians())
    }

    /// Casts the ray for one column. `None` when `index` is outside the sweep.
    pub fn column(&self, pose: &Pose, maze: &Maze, index: usize) -> Option<Column> {
        if index >= self.columns {
            return None;
        }

        let angle = self.ray_angle(pose.heading, index);
        let mut distance = raycast::cast(pose.position, angle, maze);
        if distance == 0.0 {
            distance = MIN_DISTANCE;
        }

        let height = self.viewport.height;
        let line_height = height / distance;
        let center = height / 2.0;

        Some(Column {
            screen_x: index as f32 * (self.viewport.width / self.columns as f32),
            distance,
            draw_start: center - line_height / 2.0,
            draw_end: center + line_height / 2.0,
            color: self.near_color.shade(distance, self.max_distance),
        })
    }
}

#[derive(Clone, Debug)]
pub struct Columns<'a> {
    camera: &'a Camera,
    maze: &'a Maze,
    pose: Pose,
    next: usize,
}

impl Iterator for Columns<'_> {
    type Item = Column;

    fn next(&mut self) -> Option<Column> {
        let column = self.camera.column(&self.pose, self.maze, self.next)?;
        self.next += 1;
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.camera.columns.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Columns<'_> {}

impl FusedIterator for Columns<'_> {}
