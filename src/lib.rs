//! Rink Pong - a two-paddle rink game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rink layout, touch input, physics, ball reset)
//! - `scene`: Drawable node list handed to the host renderer
//! - `settings`: Tunable game dimensions and speeds, loadable from JSON

pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::{Color, Scene, SceneNode, Shape, build_scene};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed physics substep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the physics accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 13.5;
    /// Velocity given to every freshly served ball
    pub const SERVE_VELOCITY: Vec2 = Vec2::new(200.0, 200.0);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the top/bottom edge to the paddle centre
    pub const PADDLE_EDGE_OFFSET: f32 = 60.0;
    /// Points per second while a paddle zone is held
    pub const PADDLE_SPEED: f32 = 150.0;

    /// Wall thickness
    pub const WALL_WIDTH: f32 = 5.0;

    /// Goal line detector size
    pub const DETECTOR_WIDTH: f32 = 100.0;
    pub const DETECTOR_HEIGHT: f32 = 10.0;

    /// Portrait phone-sized scene used when the host gives no size
    pub const DEFAULT_SCENE_WIDTH: f32 = 390.0;
    pub const DEFAULT_SCENE_HEIGHT: f32 = 844.0;
}

/// Build a vector from a heading (radians) and length
#[inline]
pub fn vector_from_angle(radians: f32, length: f32) -> Vec2 {
    Vec2::new(radians.cos() * length, radians.sin() * length)
}

/// Build a vector from a heading (degrees) and length
#[inline]
pub fn vector_from_angle_degrees(degrees: f32, length: f32) -> Vec2 {
    vector_from_angle(degrees.to_radians(), length)
}

/// Heading of a vector in radians, in (-π, π]
#[inline]
pub fn vector_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Heading of a vector in degrees
#[inline]
pub fn vector_angle_degrees(v: Vec2) -> f32 {
    vector_angle(v).to_degrees()
}
