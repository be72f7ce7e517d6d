//! Axis-aligned rectangle geometry for walls, paddles and goal detectors
//!
//! Rects are stored the way the scene places nodes: a centre position plus a
//! size, with the edges derived on demand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Centre of the rectangle
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl Rect {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Bottom-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_size()
    }

    /// Top-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_size()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Closest point on or inside the rect
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }
}
