//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed physics timestep only
//! - No randomness (every serve uses the same velocity)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod rink;
pub mod state;
pub mod tick;

pub use body::{PhysicsBody, combined_restitution};
pub use collision::{CollisionResult, ball_rect_collision, bounce_velocity, reflect_velocity};
pub use geometry::Rect;
pub use input::{Touch, touches_began, touches_cancelled, touches_ended, touches_moved};
pub use rink::Marking;
pub use state::{
    Ball, BallDetector, GameEvent, GameState, Paddle, PaddleDirection, Side, Wall, WallKind,
};
pub use tick::{move_paddle, step_physics, update};
