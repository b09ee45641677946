//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only (initialization is the sole consumer)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, World, PALETTE};
pub use tick::{step_ball, tick};
