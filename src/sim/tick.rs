//! Per-frame simulation tick
//!
//! Advances every ball by one frame of motion and resolves wall bounces.
//! Velocity is measured in pixels per frame, so the integration step is
//! implicit in the frame rate.

use glam::Vec2;

use super::state::{Ball, World};

/// Advance the world by one frame
pub fn tick(world: &mut World) {
    for ball in &mut world.balls {
        step_ball(ball, world.bounds);
    }
}

/// Advance one ball by one frame and bounce it off the screen edges.
///
/// Wall contact uses closed comparisons: a circle exactly touching an edge
/// bounces on that frame. A vertical bounce also pushes the ball back to the
/// wall; a horizontal bounce leaves the position where it landed.
pub fn step_ball(ball: &mut Ball, bounds: Vec2) {
    ball.pos += ball.vel;

    if ball.pos.x + ball.radius >= bounds.x || ball.pos.x - ball.radius <= 0.0 {
        ball.vel.x = -ball.vel.x;
    }

    if ball.pos.y + ball.radius >= bounds.y || ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
        if ball.pos.y + ball.radius >= bounds.y {
            ball.pos.y = bounds.y - ball.radius;
        } else if ball.pos.y - ball.radius <= 0.0 {
            ball.pos.y = ball.radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 450.0);

    fn ball(pos: (f32, f32), vel: (f32, f32)) -> Ball {
        Ball {
            pos: Vec2::new(pos.0, pos.1),
            vel: Vec2::new(vel.0, vel.1),
            radius: 20.0,
            color: [1.0; 4],
        }
    }

    #[test]
    fn test_free_flight_is_straight_line() {
        let mut b = ball((400.0, 225.0), (2.0, 2.0));
        for _ in 0..100 {
            step_ball(&mut b, BOUNDS);
        }
        assert_eq!(b.pos, Vec2::new(600.0, 425.0));
        assert_eq!(b.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_corner_bounce_clamps_y_only() {
        let mut b = ball((10.0, 10.0), (-3.0, -3.0));
        step_ball(&mut b, BOUNDS);

        // Both axes hit past the top-left corner, so both components flip.
        assert_eq!(b.vel, Vec2::new(3.0, 3.0));
        // Y is pushed back to the wall; X keeps its post-integration value.
        assert_eq!(b.pos, Vec2::new(7.0, 20.0));
    }

    #[test]
    fn test_right_edge_touch_reflects() {
        // 780 + 20 == 800: exact contact counts as a hit
        let mut b = ball((778.0, 225.0), (2.0, 0.0));
        step_ball(&mut b, BOUNDS);
        assert_eq!(b.pos.x, 780.0);
        assert_eq!(b.vel.x, -2.0);
    }

    #[test]
    fn test_left_edge_touch_reflects() {
        // 20 - 20 == 0: exact contact counts as a hit
        let mut b = ball((23.0, 225.0), (-3.0, 0.0));
        step_ball(&mut b, BOUNDS);
        assert_eq!(b.pos.x, 20.0);
        assert_eq!(b.vel.x, 3.0);
    }

    #[test]
    fn test_bounce_flips_one_axis_only() {
        let mut b = ball((778.0, 225.0), (4.0, 1.5));
        step_ball(&mut b, BOUNDS);
        assert_eq!(b.vel, Vec2::new(-4.0, 1.5));
        assert_eq!(b.pos.y, 226.5);
    }

    #[test]
    fn test_floor_bounce_clamps_position() {
        let mut b = ball((400.0, 428.0), (0.0, 5.0));
        step_ball(&mut b, BOUNDS);
        assert_eq!(b.vel.y, -5.0);
        assert_eq!(b.pos.y, 430.0);
    }

    #[test]
    fn test_tick_population_fixed() {
        let config = Config::default();
        let mut world = World::new(&config, 7);
        for _ in 0..1000 {
            tick(&mut world);
        }
        assert_eq!(world.balls.len(), config.ball_count);
    }

    proptest! {
        #[test]
        fn prop_bounce_preserves_speed(
            x in 0.0f32..800.0,
            y in 0.0f32..450.0,
            vx in -8.0f32..8.0,
            vy in -8.0f32..8.0,
        ) {
            let mut b = ball((x, y), (vx, vy));
            step_ball(&mut b, BOUNDS);

            // Each component is either untouched or exactly negated
            prop_assert!(b.vel.x == vx || b.vel.x == -vx);
            prop_assert!(b.vel.y == vy || b.vel.y == -vy);
        }

        #[test]
        fn prop_y_contained_after_tick(seed in any::<u64>(), frames in 1usize..200) {
            let config = Config {
                ball_count: 64,
                ..Config::default()
            };
            let mut world = World::new(&config, seed);
            for _ in 0..frames {
                tick(&mut world);
            }
            for b in &world.balls {
                prop_assert!(b.pos.y >= b.radius);
                prop_assert!(b.pos.y <= world.bounds.y - b.radius);
            }
        }

        #[test]
        fn prop_free_flight_matches_extrapolation(
            steps in 1u32..20,
            vx in -3.0f32..3.0,
            vy in -3.0f32..3.0,
        ) {
            let start = Vec2::new(400.0, 225.0);
            let mut b = ball((start.x, start.y), (vx, vy));
            for _ in 0..steps {
                step_ball(&mut b, BOUNDS);
            }
            let expected = start + Vec2::new(vx, vy) * steps as f32;
            prop_assert!((b.pos - expected).length() < 1e-3);
        }
    }
}
