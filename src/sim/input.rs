//! Touch input
//!
//! The scene is split into quadrants. The lower half drives the bottom paddle
//! and the upper half the top paddle; the left or right half of the screen
//! picks the direction. A direction is latched when the finger goes down and
//! released when it lifts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, PaddleDirection, Side};

/// A touch location in scene coordinates (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    pub x: f32,
    pub y: f32,
}

impl Touch {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Touch {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Direction chosen by a touch's horizontal half
pub fn direction_for(touch: Touch, size: Vec2) -> PaddleDirection {
    if touch.x < size.x / 2.0 {
        PaddleDirection::Left
    } else {
        PaddleDirection::Right
    }
}

/// Paddle controlled by a touch's vertical half
pub fn side_for(touch: Touch, size: Vec2) -> Side {
    if touch.y < size.y / 2.0 {
        Side::Bottom
    } else {
        Side::Top
    }
}

/// Fingers went down: latch a direction for each touched half
pub fn touches_began(state: &mut GameState, touches: &[Touch]) {
    for &touch in touches {
        let side = side_for(touch, state.size);
        let direction = direction_for(touch, state.size);
        state.set_direction(side, direction);
    }
}

/// Fingers moved: directions stay latched from touch-down
pub fn touches_moved(state: &mut GameState, touches: &[Touch]) {
    log::trace!(
        "{} touches moved (bottom {:?}, top {:?})",
        touches.len(),
        state.bottom_direction,
        state.top_direction
    );
}

/// Fingers lifted: stop the paddle of each touched half
pub fn touches_ended(state: &mut GameState, touches: &[Touch]) {
    for &touch in touches {
        let side = side_for(touch, state.size);
        state.set_direction(side, PaddleDirection::Still);
    }
}

/// The host interrupted the touches; treated like lifting the fingers
pub fn touches_cancelled(state: &mut GameState, touches: &[Touch]) {
    touches_ended(state, touches);
}
