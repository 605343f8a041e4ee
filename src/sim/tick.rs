//! Per-frame simulation step
//!
//! Ties progression, motion, collision, and spawning together once per
//! rendered frame. The caller supplies elapsed wall-clock time and drained
//! input signals; nothing here reads a clock or polls events.

use super::collision::{self, BallImpact};
use super::spawn;
use super::state::{GameState, Progress};

/// External input signals drained for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer x already mapped into [-1, 1] by the platform layer
    pub pointer_x: Option<f32>,
    /// Edge-triggered primary click
    pub primary_click: bool,
    /// Quit request; consumed by the loop driving `tick`, not by the
    /// simulation itself
    pub quit: bool,
}

/// Advance the game by one frame of `dt` elapsed seconds.
///
/// Outside `Playing` no physics runs: the menu and game-over screens only
/// react to the pointer (menu) and the restart click.
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) {
    // the paddle stops following the pointer once the run has ended
    if state.progress != Progress::GameOver {
        if let Some(x) = input.pointer_x {
            state.paddle.pos.x = x;
        }
    }

    if input.primary_click && matches!(state.progress, Progress::Menu | Progress::GameOver) {
        state.reset_run();
    }

    if state.progress != Progress::Playing {
        return;
    }

    state.spawn_timer += dt;
    state.level_cooldown += dt;

    // hammer bounds are fixed for the frame, even if a hit shrinks the
    // paddle mid-loop
    let paddle_box = state.paddle.aabb();

    for i in 0..state.balls.len() {
        if !state.balls[i].alive {
            continue;
        }

        let impact = collision::step_ball(&mut state.balls[i], &paddle_box, dt);
        if impact == Some(BallImpact::FaceBounce) {
            state.shrink_paddle();
            if state.progress == Progress::GameOver {
                // lost: nothing else moves this frame
                return;
            }
        }

        let ball = &mut state.balls[i];
        collision::bounce_off_walls(ball.pos, &mut ball.vel);
    }

    spawn::update(state);

    if state.all_balls_cleared() {
        state.advance_level();
    }
}
