//! Centralized constants used across the application.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Width and height of a newly created rectangle
pub const DEFAULT_SHAPE_SIZE: [i32; 2] = [120, 80];

/// Radius of a newly created circle
pub const DEFAULT_CIRCLE_RADIUS: i32 = 50;

/// Distance a shape moves per arrow key press
pub const NUDGE_STEP: i32 = 10;

/// Outline color of shapes (sRGBA)
pub const DEFAULT_SHAPE_COLOR: [f32; 4] = [0.9, 0.9, 0.95, 1.0];
