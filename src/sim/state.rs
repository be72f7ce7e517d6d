//! Game state and core simulation types
//!
//! Everything the rink needs between frames lives here: the ball, both
//! paddles, the walls, the goal line detectors and the latched touch
//! directions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::geometry::Rect;
use super::rink::{Marking, markings};
use crate::settings::Settings;
use crate::vector_angle_degrees;

/// Direction a paddle is being driven, latched from the touch zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleDirection {
    Left,
    Right,
    #[default]
    Still,
}

/// Which end of the rink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

/// The puck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub body: PhysicsBody,
}

impl Ball {
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn heading_degrees(&self) -> f32 {
        vector_angle_degrees(self.vel)
    }
}

/// A player paddle, moved only along x
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub body: PhysicsBody,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallKind {
    /// Side wall (drawn)
    Vertical,
    /// End wall behind a goal (drawn in the background colour)
    Horizontal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub kind: WallKind,
    pub rect: Rect,
    pub body: PhysicsBody,
}

/// Invisible goal line; a ball touching it has passed that end's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallDetector {
    pub side: Side,
    pub rect: Rect,
    pub body: PhysicsBody,
}

/// Something that happened during the last frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The ball reached the goal line at `side`
    BallPassed { side: Side },
    /// A ball was given the serve velocity
    BallServed { ball_id: u32 },
    WallHit,
    PaddleHit { side: Side },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Scene size
    pub size: Vec2,
    pub settings: Settings,
    /// Floor markings (no physics)
    pub markings: Vec<Marking>,
    pub ball: Ball,
    pub top_paddle: Paddle,
    pub bottom_paddle: Paddle,
    pub walls: Vec<Wall>,
    pub top_detector: BallDetector,
    pub bottom_detector: BallDetector,
    pub top_direction: PaddleDirection,
    pub bottom_direction: PaddleDirection,
    /// Timestamp of the previous frame (0 until the first frame)
    pub last_update_time: f64,
    /// Unsimulated time carried to the next frame
    pub accumulator: f32,
    /// Physics substeps run so far
    pub time_ticks: u64,
    /// Number of times the ball has been reset after passing a paddle
    pub resets: u32,
    /// Events raised during the last `update`
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Start a new game in a scene of the given size
    pub fn new(size: Vec2, settings: Settings) -> Self {
        let settings = settings.with_scene_size(size);
        let center = size / 2.0;
        let placeholder = Rect::from_center_size(center, Vec2::ZERO);
        let mut state = Self {
            size,
            settings,
            markings: Vec::new(),
            ball: Ball {
                id: 0,
                pos: center,
                vel: Vec2::ZERO,
                radius: 0.0,
                body: PhysicsBody::ideal(),
            },
            top_paddle: Paddle {
                side: Side::Top,
                pos: center,
                size: Vec2::ZERO,
                body: PhysicsBody::ideal().manual_movement(),
            },
            bottom_paddle: Paddle {
                side: Side::Bottom,
                pos: center,
                size: Vec2::ZERO,
                body: PhysicsBody::ideal().manual_movement(),
            },
            walls: Vec::new(),
            top_detector: BallDetector {
                side: Side::Top,
                rect: placeholder,
                body: PhysicsBody::ideal().manual_movement(),
            },
            bottom_detector: BallDetector {
                side: Side::Bottom,
                rect: placeholder,
                body: PhysicsBody::ideal().manual_movement(),
            },
            top_direction: PaddleDirection::Still,
            bottom_direction: PaddleDirection::Still,
            last_update_time: 0.0,
            accumulator: 0.0,
            time_ticks: 0,
            resets: 0,
            events: Vec::new(),
            next_id: 1,
        };
        state.start_game();
        state
    }

    /// Clear the rink and start over with the same size and settings
    pub fn restart(&mut self) {
        log::debug!("Restarting game ({} resets so far)", self.resets);
        *self = Self::new(self.size, self.settings.clone());
    }

    fn start_game(&mut self) {
        self.markings = markings(self.size);
        self.create_ball();
        self.create_walls();
        self.create_passed_ball_detectors();
        self.create_paddles();
        self.reset_ball();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Replace the ball with a fresh, motionless one at the centre
    pub fn create_ball(&mut self) {
        let id = self.next_entity_id();
        self.ball = Ball {
            id,
            pos: self.center(),
            vel: Vec2::ZERO,
            radius: self.settings.ball_radius,
            body: PhysicsBody::ideal(),
        };
    }

    /// Serve the current ball
    pub fn reset_ball(&mut self) {
        self.ball.vel = self.settings.serve_velocity;
        log::debug!(
            "Serving ball {} at {:.1} pts/s, {:.0}°",
            self.ball.id,
            self.ball.speed(),
            self.ball.heading_degrees()
        );
        self.events.push(GameEvent::BallServed {
            ball_id: self.ball.id,
        });
    }

    fn create_walls(&mut self) {
        let (w, h) = (self.size.x, self.size.y);
        let wall_width = self.settings.wall_width;
        let body = PhysicsBody::ideal().manual_movement();

        let vertical = Vec2::new(wall_width, h);
        let horizontal = Vec2::new(w, wall_width);
        self.walls = vec![
            Wall {
                kind: WallKind::Vertical,
                rect: Rect::from_center_size(Vec2::new(wall_width / 2.0, h / 2.0), vertical),
                body,
            },
            Wall {
                kind: WallKind::Vertical,
                rect: Rect::from_center_size(Vec2::new(w - wall_width / 2.0, h / 2.0), vertical),
                body,
            },
            Wall {
                kind: WallKind::Horizontal,
                rect: Rect::from_center_size(Vec2::new(w / 2.0, 0.0), horizontal),
                body,
            },
            Wall {
                kind: WallKind::Horizontal,
                rect: Rect::from_center_size(Vec2::new(w / 2.0, h), horizontal),
                body,
            },
        ];
    }

    fn create_passed_ball_detectors(&mut self) {
        let size = self.settings.detector_size;
        let body = PhysicsBody::ideal().manual_movement().with_contact_test();
        let x = self.size.x / 2.0;

        self.bottom_detector = BallDetector {
            side: Side::Bottom,
            rect: Rect::from_center_size(Vec2::new(x, 0.0), size),
            body,
        };
        self.top_detector = BallDetector {
            side: Side::Top,
            rect: Rect::from_center_size(Vec2::new(x, self.size.y), size),
            body,
        };
    }

    fn create_paddles(&mut self) {
        let offset = self.settings.paddle_edge_offset;
        let x = self.size.x / 2.0;
        let size = self.settings.paddle_size;
        let body = PhysicsBody::ideal().manual_movement();

        self.top_paddle = Paddle {
            side: Side::Top,
            pos: Vec2::new(x, self.size.y - offset),
            size,
            body,
        };
        self.bottom_paddle = Paddle {
            side: Side::Bottom,
            pos: Vec2::new(x, offset),
            size,
            body,
        };
    }

    /// Allowed range for a paddle's centre x
    pub fn paddle_x_range(&self) -> (f32, f32) {
        let half = self.settings.paddle_size.x / 2.0;
        let wall = self.settings.wall_width;
        (wall + half, self.size.x - wall - half)
    }

    /// Allowed range for the ball's centre x, between the side walls' inner faces
    pub fn ball_x_range(&self) -> (f32, f32) {
        let inset = self.settings.wall_width + self.ball.radius;
        (inset, self.size.x - inset)
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Top => &self.top_paddle,
            Side::Bottom => &self.bottom_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Top => &mut self.top_paddle,
            Side::Bottom => &mut self.bottom_paddle,
        }
    }

    pub fn direction(&self, side: Side) -> PaddleDirection {
        match side {
            Side::Top => self.top_direction,
            Side::Bottom => self.bottom_direction,
        }
    }

    pub fn set_direction(&mut self, side: Side, direction: PaddleDirection) {
        match side {
            Side::Top => self.top_direction = direction,
            Side::Bottom => self.bottom_direction = direction,
        }
    }

    /// Both goal detectors, bottom first
    pub fn detectors(&self) -> [&BallDetector; 2] {
        [&self.bottom_detector, &self.top_detector]
    }
}
