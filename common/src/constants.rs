use std::f32::consts::PI;

// Maze:
pub const MIN_MAZE_SIZE: usize = 5;
pub const DEFAULT_MAZE_SIZE: usize = 21; // Odd, so the lattice of rooms lines up with both edge walls.

// Ray marching:
pub const RAY_STEPS: usize = 20; // Maximum ray length in grid units.
pub const RAY_SUBSTEPS: usize = 16; // Samples per grid unit.

// Projection:
pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
pub const DEFAULT_COLUMNS: usize = 250;
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 500.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 500.0;
pub const MAX_RENDER_DISTANCE: f32 = 15.0; // Walls at or beyond this distance shade to black.
pub const MIN_DISTANCE: f32 = 0.0001;
pub const SHADE_STEP: f32 = 8.0; // Channel quantization for the banded look.

// Player:
pub const PLAYER_SPEED: f32 = 0.1; // Grid units per update.
pub const MOUSE_SENSITIVITY: f32 = 0.001; // Radians per pixel.
pub const TURN_STEP: f32 = PI / 90.0; // Radians per key press.
