//! Scene description for the host renderer
//!
//! The host engine owns drawing. Each frame it asks for the node list built
//! from the current `GameState` and places one shape per node.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Marking, Side, WallKind};

/// Named palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Blue,
    SystemBlue,
    SystemRed,
    SystemOrange,
}

impl Color {
    /// Linear RGBA
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Color::White => [1.0, 1.0, 1.0, 1.0],
            Color::Black => [0.0, 0.0, 0.0, 1.0],
            Color::Blue => [0.0, 0.0, 1.0, 1.0],
            Color::SystemBlue => [0.0, 0.478, 1.0, 1.0],
            Color::SystemRed => [1.0, 0.231, 0.188, 1.0],
            Color::SystemOrange => [1.0, 0.584, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { size: Vec2 },
}

/// One drawable node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub shape: Shape,
    /// Centre of the node
    pub position: Vec2,
    pub stroke: Color,
    /// `None` = outline only
    pub fill: Option<Color>,
    pub line_width: f32,
}

impl SceneNode {
    fn filled(
        name: impl Into<String>,
        shape: Shape,
        position: Vec2,
        stroke: Color,
        fill: Color,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            position,
            stroke,
            fill: Some(fill),
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub size: Vec2,
    pub background: Color,
    /// Back to front
    pub nodes: Vec<SceneNode>,
}

/// Background colour of the rink; end walls and goal lines are drawn in it
pub const BACKGROUND: Color = Color::White;

/// Build the node list for the current state, markings first
pub fn build_scene(state: &GameState) -> Scene {
    let mut nodes = Vec::with_capacity(state.markings.len() + 10);

    for marking in &state.markings {
        nodes.push(match *marking {
            Marking::CenterDot { center, radius } => SceneNode::filled(
                "center_dot",
                Shape::Circle { radius },
                center,
                Color::Blue,
                Color::Blue,
            ),
            Marking::Line { center, size } => {
                SceneNode::filled("line", Shape::Rect { size }, center, Color::Blue, Color::Blue)
            }
            Marking::GoalCircle {
                center,
                radius,
                line_width,
            } => SceneNode {
                name: "goal_circle".into(),
                shape: Shape::Circle { radius },
                position: center,
                stroke: Color::Blue,
                fill: None,
                line_width,
            },
        });
    }

    nodes.push(SceneNode::filled(
        "ball",
        Shape::Circle {
            radius: state.ball.radius,
        },
        state.ball.pos,
        Color::Black,
        Color::SystemOrange,
    ));

    for wall in &state.walls {
        let (name, color) = match wall.kind {
            WallKind::Vertical => ("side_wall", Color::SystemOrange),
            WallKind::Horizontal => ("end_wall", BACKGROUND),
        };
        nodes.push(SceneNode::filled(
            name,
            Shape::Rect {
                size: wall.rect.size,
            },
            wall.rect.center,
            color,
            color,
        ));
    }

    for detector in state.detectors() {
        nodes.push(SceneNode::filled(
            format!("{}_detector", detector.side.as_str()),
            Shape::Rect {
                size: detector.rect.size,
            },
            detector.rect.center,
            BACKGROUND,
            BACKGROUND,
        ));
    }

    for paddle in [&state.top_paddle, &state.bottom_paddle] {
        let fill = match paddle.side {
            Side::Top => Color::SystemRed,
            Side::Bottom => Color::SystemBlue,
        };
        nodes.push(SceneNode::filled(
            format!("{}_paddle", paddle.side.as_str()),
            Shape::Rect { size: paddle.size },
            paddle.pos,
            Color::Black,
            fill,
        ));
    }

    Scene {
        size: state.size,
        background: BACKGROUND,
        nodes,
    }
}
