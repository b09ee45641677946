//! Startup configuration
//!
//! One `Config` is built in `main` and passed by reference into world
//! initialization and the frame loop. There is no runtime reconfiguration;
//! the defaults come from [`crate::consts`].

use glam::Vec2;

use crate::consts::*;

/// Fixed animation parameters
#[derive(Debug, Clone)]
pub struct Config {
    /// Window width in pixels
    pub screen_width: u32,
    /// Window height in pixels
    pub screen_height: u32,
    /// Target frame rate
    pub target_fps: u32,
    /// Number of balls to spawn
    pub ball_count: usize,
    /// Radius shared by every ball
    pub ball_radius: f32,
    /// Per-axis speed magnitude range, pixels per frame
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            ball_count: BALL_COUNT,
            ball_radius: BALL_RADIUS,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
        }
    }
}

impl Config {
    /// Screen bounds as a vector, for the simulation's wall checks
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }
}
