//! Staggered ball activation with randomized trajectories
//!
//! Balls are pre-allocated off-screen and inert; activation gives one a real
//! position on the top or bottom edge and a launch velocity aimed into the
//! interior. Sampling is split in two so tests can feed exact unit-interval
//! draws: `launch_from_units` is the pure derivation, `sample_launch` pulls
//! the draws from the state's seeded RNG.

use glam::Vec2;
use rand::Rng;

use super::state::GameState;
use crate::consts::{LEVEL_COOLDOWN, MAX_LAUNCH_VX};

/// A freshly derived spawn position and launch velocity
#[derive(Debug, Clone, Copy)]
pub struct LaunchSample {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Derive a trajectory from three unit-interval draws.
///
/// Horizontal position is uniform across the screen, the spawn edge is a
/// 50/50 pick, and the vertical speed is whatever is left of the `max_vel`
/// speed-squared budget after the horizontal component, directed away from
/// the spawn edge. Requires `max_vel >= MAX_LAUNCH_VX²` (enforced by level
/// table validation) so the square root stays real.
pub fn launch_from_units(u_x: f32, u_edge: f32, u_vx: f32, max_vel: f32) -> LaunchSample {
    let spawn_x = -1.0 + u_x * 2.0;
    let edge_y = if u_edge < 0.5 { -1.0 } else { 1.0 };
    let vx = -MAX_LAUNCH_VX + u_vx * 2.0 * MAX_LAUNCH_VX;
    let vy = -edge_y * (max_vel - vx * vx).sqrt();
    LaunchSample {
        pos: Vec2::new(spawn_x, edge_y),
        vel: Vec2::new(vx, vy),
    }
}

/// Draw a trajectory from the RNG: spawn x, edge pick, then horizontal
/// velocity, one uniform draw each
pub fn sample_launch<R: Rng>(rng: &mut R, max_vel: f32) -> LaunchSample {
    let u_x = rng.random::<f32>();
    let u_edge = rng.random::<f32>();
    let u_vx = rng.random::<f32>();
    launch_from_units(u_x, u_edge, u_vx, max_vel)
}

/// Activate the next pending ball, if any, once both gates have elapsed:
/// the level-entry cooldown (prevents instant bombardment right after a
/// transition) and the per-spawn delay.
pub fn update(state: &mut GameState) {
    let level = state.level();
    if state.level_cooldown <= LEVEL_COOLDOWN
        || state.spawn_timer <= level.spawn_delay
        || state.spawn_cursor >= state.balls.len()
    {
        return;
    }

    let sample = sample_launch(&mut state.rng, level.max_vel);
    let ball = &mut state.balls[state.spawn_cursor];
    ball.pos = sample.pos;
    ball.vel = sample.vel;

    log::debug!(
        "activated ball {} of {} at x {:.2} with velocity ({:.2}, {:.2})",
        state.spawn_cursor + 1,
        state.balls.len(),
        sample.pos.x,
        sample.vel.x,
        sample.vel.y,
    );

    state.spawn_timer = 0.0;
    state.spawn_cursor += 1;
}
