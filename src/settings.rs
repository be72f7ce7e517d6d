//! Game settings
//!
//! Rink dimensions, paddle/ball tuning and the serve velocity. Stored as JSON
//! so a host can ship its own tuning next to the binary.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading, saving or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Scene ===
    /// Scene size used when the host does not supply one
    pub scene_size: Vec2,

    // === Ball ===
    pub ball_radius: f32,
    /// Velocity applied on every serve
    pub serve_velocity: Vec2,

    // === Paddles ===
    pub paddle_size: Vec2,
    /// Distance from the top/bottom edge to the paddle centre
    pub paddle_edge_offset: f32,
    /// Points per second
    pub paddle_speed: f32,

    // === Rink ===
    pub wall_width: f32,
    /// Size of the goal line detectors
    pub detector_size: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scene_size: Vec2::new(DEFAULT_SCENE_WIDTH, DEFAULT_SCENE_HEIGHT),

            ball_radius: BALL_RADIUS,
            serve_velocity: SERVE_VELOCITY,

            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_edge_offset: PADDLE_EDGE_OFFSET,
            paddle_speed: PADDLE_SPEED,

            wall_width: WALL_WIDTH,
            detector_size: Vec2::new(DETECTOR_WIDTH, DETECTOR_HEIGHT),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Same settings with a different scene size
    pub fn with_scene_size(mut self, size: Vec2) -> Self {
        self.scene_size = size;
        self
    }

    /// Check that every dimension is usable and that the rink fits both paddles
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("ball_radius", self.ball_radius),
            ("paddle_size.x", self.paddle_size.x),
            ("paddle_size.y", self.paddle_size.y),
            ("paddle_edge_offset", self.paddle_edge_offset),
            ("paddle_speed", self.paddle_speed),
            ("wall_width", self.wall_width),
            ("detector_size.x", self.detector_size.x),
            ("detector_size.y", self.detector_size.y),
            ("scene_size.x", self.scene_size.x),
            ("scene_size.y", self.scene_size.y),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.serve_velocity.is_finite() {
            return Err(SettingsError::Invalid("serve_velocity must be finite".into()));
        }
        // One physics substep must not carry the ball through an end wall
        let step = self.serve_velocity.length() * SIM_DT;
        let max_step = self.wall_width + self.ball_radius;
        if step >= max_step {
            return Err(SettingsError::Invalid(format!(
                "serve speed {} covers {step} per substep, limit is {max_step}",
                self.serve_velocity.length()
            )));
        }
        self.check_fits(self.scene_size)
    }

    /// Check that a scene of `size` can hold the rink these settings describe
    pub fn check_fits(&self, size: Vec2) -> Result<(), SettingsError> {
        let min_width = 2.0 * self.wall_width + self.paddle_size.x;
        if size.x < min_width {
            return Err(SettingsError::Invalid(format!(
                "scene width {} is narrower than walls plus paddle ({min_width})",
                size.x
            )));
        }
        let min_height = 2.0 * (self.paddle_edge_offset + self.paddle_size.y);
        if size.y < min_height {
            return Err(SettingsError::Invalid(format!(
                "scene height {} cannot hold both paddles ({min_height})",
                size.y
            )));
        }
        Ok(())
    }
}
