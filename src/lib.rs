//! Bounce - a bouncing-ball particle animation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball state, per-frame motion, wall bounces)
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: Startup configuration

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::Config;

/// Animation configuration constants
pub mod consts {
    /// Window width in pixels
    pub const SCREEN_WIDTH: u32 = 800;
    /// Window height in pixels
    pub const SCREEN_HEIGHT: u32 = 450;
    /// Target frame rate; the simulation advances one tick per frame
    pub const TARGET_FPS: u32 = 60;

    /// Number of balls spawned at startup
    pub const BALL_COUNT: usize = 2500;
    /// Ball radius in pixels (shared by every ball)
    pub const BALL_RADIUS: f32 = 20.0;
    /// Per-axis speed magnitude range, pixels per frame
    pub const BALL_MIN_SPEED: f32 = 2.0;
    pub const BALL_MAX_SPEED: f32 = 8.0;

    /// Static overlay label
    pub const UI_LABEL: &str = "RUST VERSION - BOUNCING BALLS";
    /// Overlay glyph height in pixels
    pub const UI_TEXT_SIZE: f32 = 20.0;

    /// Window title
    pub const WINDOW_TITLE: &str = "Bounce";
}
