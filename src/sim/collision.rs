//! Collision detection and response for a ball against rink rectangles

use glam::Vec2;

use super::geometry::Rect;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point on the rect surface (if hit)
    pub point: Vec2,
    /// Surface normal at contact, pointing from the rect toward the ball
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between a ball and an axis-aligned rect
///
/// A ball whose centre has already entered the rect is pushed out along the
/// axis of least penetration.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    let closest = rect.closest_point(ball_pos);
    let delta = ball_pos - closest;
    let dist_sq = delta.length_squared();

    if dist_sq > ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    if dist_sq > f32::EPSILON {
        let dist = dist_sq.sqrt();
        return CollisionResult {
            hit: true,
            point: closest,
            normal: delta / dist,
            penetration: ball_radius - dist,
        };
    }

    // Centre is inside the rect
    let offset = ball_pos - rect.center;
    let half = rect.half_size();
    let overlap_x = half.x - offset.x.abs();
    let overlap_y = half.y - offset.y.abs();

    if overlap_x < overlap_y {
        let sign = if offset.x < 0.0 { -1.0 } else { 1.0 };
        CollisionResult {
            hit: true,
            point: Vec2::new(rect.center.x + sign * half.x, ball_pos.y),
            normal: Vec2::new(sign, 0.0),
            penetration: overlap_x + ball_radius,
        }
    } else {
        let sign = if offset.y < 0.0 { -1.0 } else { 1.0 };
        CollisionResult {
            hit: true,
            point: Vec2::new(ball_pos.x, rect.center.y + sign * half.y),
            normal: Vec2::new(0.0, sign),
            penetration: overlap_y + ball_radius,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Bounce off a frictionless surface, scaling the normal component by `restitution`
#[inline]
pub fn bounce_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    velocity - (1.0 + restitution) * velocity.dot(normal) * normal
}
