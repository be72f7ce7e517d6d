//! Physics body material and motion flags
//!
//! Every body in the rink is "ideal": no friction, no damping, perfectly
//! elastic. Walls, paddles and detectors additionally opt out of simulated
//! motion and are positioned by the game code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub friction: f32,
    /// Fraction of velocity lost per second
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// 1.0 = perfectly elastic
    pub restitution: f32,
    /// Moved by the physics step (false = positioned manually)
    pub dynamic: bool,
    pub allows_rotation: bool,
    pub affected_by_gravity: bool,
    /// Reports contacts to the game (goal detectors)
    pub contact_test: bool,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            friction: 0.2,
            linear_damping: 0.1,
            angular_damping: 0.1,
            restitution: 0.2,
            dynamic: true,
            allows_rotation: true,
            affected_by_gravity: true,
            contact_test: false,
        }
    }
}

impl PhysicsBody {
    /// A frictionless, undamped, perfectly elastic body
    pub fn ideal() -> Self {
        Self {
            friction: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            restitution: 1.0,
            ..Self::default()
        }
    }

    /// Opt out of simulated motion; the game positions this body itself
    pub fn manual_movement(mut self) -> Self {
        self.dynamic = false;
        self.allows_rotation = false;
        self.affected_by_gravity = false;
        self
    }

    /// Report contacts with this body
    pub fn with_contact_test(mut self) -> Self {
        self.contact_test = true;
        self
    }

    /// Velocity scale applied after `dt` seconds of linear damping
    #[inline]
    pub fn damping_factor(&self, dt: f32) -> f32 {
        (1.0 - self.linear_damping * dt).max(0.0)
    }
}

/// Restitution used when two bodies bounce off each other
#[inline]
pub fn combined_restitution(a: &PhysicsBody, b: &PhysicsBody) -> f32 {
    a.restitution * b.restitution
}
