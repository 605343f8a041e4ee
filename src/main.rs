//! Hammer entry point
//!
//! The shipped game hosts the simulation behind a window, renderer, and
//! event loop supplied by the platform layer. This binary validates the
//! level table and runs a scripted headless session of the core at a fixed
//! step, which doubles as a smoke test of the full progression path.

use std::time::{SystemTime, UNIX_EPOCH};

use hammer::sim::{self, FrameInput, GameState, Progress};

fn main() {
    env_logger::init();

    if let Err(err) = sim::levels::validate(&sim::LEVELS) {
        log::error!("invalid level table: {err}");
        std::process::exit(1);
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    log::info!("headless demo, seed {seed}");

    // click to start the run
    let click = FrameInput {
        primary_click: true,
        ..Default::default()
    };
    sim::tick(&mut state, &click, 0.0);

    let dt = 1.0 / 60.0;
    let mut time = 0.0f32;
    // sweep the paddle back and forth and let the run play out, capped at
    // ten minutes of simulated time
    while time < 600.0 {
        let input = FrameInput {
            pointer_x: Some((time * 0.7).sin() * 0.9),
            ..Default::default()
        };
        sim::tick(&mut state, &input, dt);
        time += dt;

        if state.progress == Progress::GameOver {
            break;
        }
    }

    let rects = sim::draw_list(&state);
    log::info!(
        "demo ended after {time:.1}s on level {} ({:?}), {} rectangles in the final frame",
        state.level_index,
        state.progress,
        rects.len(),
    );
}
