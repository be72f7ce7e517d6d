//! Rink floor markings
//!
//! Purely decorative: a centre dot, three cross lines and a goal circle at
//! each end. None of these take part in physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Radius of the centre dot
pub const CENTER_DOT_RADIUS: f32 = 5.0;
/// Thickness of the cross lines
pub const LINE_THICKNESS: f32 = 4.0;
/// Radius of the goal circles
pub const GOAL_CIRCLE_RADIUS: f32 = 100.0;
/// Stroke width of the goal circles
pub const GOAL_CIRCLE_LINE_WIDTH: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Marking {
    /// Filled dot at the centre of the rink
    CenterDot { center: Vec2, radius: f32 },
    /// Filled full-width line
    Line { center: Vec2, size: Vec2 },
    /// Stroked (unfilled) circle around a goal
    GoalCircle {
        center: Vec2,
        radius: f32,
        line_width: f32,
    },
}

/// Lay out the markings for a scene of the given size
pub fn markings(size: Vec2) -> Vec<Marking> {
    let center = size / 2.0;
    let line_size = Vec2::new(size.x, LINE_THICKNESS);

    vec![
        Marking::CenterDot {
            center,
            radius: CENTER_DOT_RADIUS,
        },
        Marking::Line {
            center,
            size: line_size,
        },
        Marking::Line {
            center: Vec2::new(center.x, size.y / 4.0),
            size: line_size,
        },
        Marking::Line {
            center: Vec2::new(center.x, size.y / 4.0 * 3.0),
            size: line_size,
        },
        Marking::GoalCircle {
            center: Vec2::new(center.x, size.y),
            radius: GOAL_CIRCLE_RADIUS,
            line_width: GOAL_CIRCLE_LINE_WIDTH,
        },
        Marking::GoalCircle {
            center: Vec2::new(center.x, 0.0),
            radius: GOAL_CIRCLE_RADIUS,
            line_width: GOAL_CIRCLE_LINE_WIDTH,
        },
    ]
}
