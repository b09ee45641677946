//! Ball state and seeded initialization
//!
//! The ball collection is created once at startup and mutated in place every
//! frame; nothing is spawned or destroyed afterwards.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;

/// Fixed ball color palette, linear RGBA
pub const PALETTE: [[f32; 4]; 17] = [
    [0.902, 0.161, 0.216, 1.0], // red
    [0.0, 0.475, 0.945, 1.0],   // blue
    [0.0, 0.894, 0.188, 1.0],   // green
    [0.992, 0.976, 0.0, 1.0],   // yellow
    [0.784, 0.478, 1.0, 1.0],   // purple
    [1.0, 0.631, 0.0, 1.0],     // orange
    [1.0, 0.427, 0.761, 1.0],   // pink
    [1.0, 0.796, 0.0, 1.0],     // gold
    [0.0, 0.620, 0.184, 1.0],   // lime
    [0.745, 0.129, 0.216, 1.0], // maroon
    [0.0, 0.459, 0.173, 1.0],   // dark green
    [0.4, 0.749, 1.0, 1.0],     // sky blue
    [0.0, 0.322, 0.675, 1.0],   // dark blue
    [1.0, 0.0, 1.0, 1.0],       // magenta
    [0.298, 0.247, 0.184, 1.0], // dark brown
    [0.510, 0.510, 0.510, 1.0], // gray
    [0.314, 0.314, 0.314, 1.0], // dark gray
];

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Circle center, screen coordinates (y down)
    pub pos: Vec2,
    /// Displacement per frame along each axis
    pub vel: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

impl Ball {
    /// Spawn one ball with randomized position, velocity, and color.
    ///
    /// Positions sample integer pixels inset by the radius so the circle
    /// starts fully inside the screen. Speeds sample integer hundredths,
    /// then each axis's sign is flipped with probability 1/2.
    fn spawn(rng: &mut Pcg32, config: &Config) -> Self {
        let r = config.ball_radius as i32;
        let x = rng.random_range(r..=config.screen_width as i32 - r);
        let y = rng.random_range(r..=config.screen_height as i32 - r);

        let min = (config.min_speed * 100.0) as i32;
        let max = (config.max_speed * 100.0) as i32;
        let mut vx = rng.random_range(min..=max) as f32 / 100.0;
        let mut vy = rng.random_range(min..=max) as f32 / 100.0;
        if rng.random::<bool>() {
            vx = -vx;
        }
        if rng.random::<bool>() {
            vy = -vy;
        }

        Self {
            pos: Vec2::new(x as f32, y as f32),
            vel: Vec2::new(vx, vy),
            radius: config.ball_radius,
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Screen bounds in pixels
    pub bounds: Vec2,
    /// The ball collection; fixed cardinality for the process lifetime
    pub balls: Vec<Ball>,
}

impl World {
    /// Create a world with `config.ball_count` balls from the given seed
    pub fn new(config: &Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = (0..config.ball_count)
            .map(|_| Ball::spawn(&mut rng, config))
            .collect();

        Self {
            seed,
            bounds: config.bounds(),
            balls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_population_size() {
        let config = Config::default();
        let world = World::new(&config, 12345);
        assert_eq!(world.balls.len(), config.ball_count);
    }

    #[test]
    fn test_spawn_within_bounds() {
        // Default config: 2500 balls, radius 20, 800x450, speeds 2.0-8.0
        let config = Config::default();
        let world = World::new(&config, 20260806);

        for ball in &world.balls {
            assert!(ball.radius > 0.0);
            assert!(ball.pos.x >= 20.0 && ball.pos.x <= 780.0, "x = {}", ball.pos.x);
            assert!(ball.pos.y >= 20.0 && ball.pos.y <= 430.0, "y = {}", ball.pos.y);
            assert!(
                ball.vel.x.abs() >= 2.0 && ball.vel.x.abs() <= 8.0,
                "vx = {}",
                ball.vel.x
            );
            assert!(
                ball.vel.y.abs() >= 2.0 && ball.vel.y.abs() <= 8.0,
                "vy = {}",
                ball.vel.y
            );
            assert!(PALETTE.contains(&ball.color));
        }
    }

    #[test]
    fn test_spawn_determinism() {
        // Two worlds with the same seed should be identical
        let config = Config::default();
        let world1 = World::new(&config, 99999);
        let world2 = World::new(&config, 99999);
        assert_eq!(world1, world2);
    }

    #[test]
    fn test_spawn_seed_varies_layout() {
        let config = Config::default();
        let world1 = World::new(&config, 1);
        let world2 = World::new(&config, 2);
        assert_ne!(world1.balls, world2.balls);
    }
}
