//! Hammer - a single-screen paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (progression, collisions, spawning)
//!
//! Rendering and platform event polling are external collaborators: the
//! simulation consumes elapsed time, a normalized pointer x coordinate, and
//! discrete click/quit signals, and emits an ordered list of colored
//! rectangles each frame.

pub mod sim;

pub use sim::{FrameInput, GameState, Progress};

/// Game configuration constants
pub mod consts {
    use glam::{U8Vec4, Vec2};

    /// Paddle dimensions at full width; the paddle is square at the loss
    /// floor (min width == height)
    pub const PADDLE_WIDTH: f32 = 0.29;
    pub const PADDLE_HEIGHT: f32 = 0.07;
    pub const PADDLE_COLOR: U8Vec4 = U8Vec4::new(0xFF, 0xFF, 0xFF, 0xFF);
    /// Cosmetic recolor applied once on clearing the final level
    pub const PADDLE_WIN_COLOR: U8Vec4 = U8Vec4::new(0x00, 0x00, 0xFF, 0xFF);

    /// Ball side length and spawn color
    pub const BALL_SIZE: f32 = 0.04;
    pub const BALL_COLOR: U8Vec4 = U8Vec4::new(0xFF, 0x22, 0x22, 0xFF);
    /// Parking spot for balls that are allocated but not yet activated
    pub const OFFSCREEN: Vec2 = Vec2::new(-2.0, -2.0);
    /// Off-screen y for balls knocked out past the paddle's edge
    pub const OFFSCREEN_Y: f32 = -2.0;

    /// Vertical bounce damping on a paddle-face hit
    pub const BOUNCE_DAMP: f32 = 0.8;
    /// Multiplicative red-channel fade per paddle-face hit
    pub const HIT_FADE: f32 = 0.9;
    /// Added to each shrink step so the configured hit count always reaches
    /// the floor despite float accumulation
    pub const SHRINK_EPSILON: f32 = 0.001;

    /// Seconds after a level starts before any ball may activate
    pub const LEVEL_COOLDOWN: f32 = 4.0;
    /// Cooldown credit at run start so the first activation arrives sooner
    pub const FIRST_COOLDOWN_CREDIT: f32 = 2.0;
    /// Horizontal launch speed is drawn from [-MAX_LAUNCH_VX, MAX_LAUNCH_VX]
    pub const MAX_LAUNCH_VX: f32 = 0.5;

    /// Level indicator strip along the top of the screen
    pub const INDICATOR_Y: f32 = 0.95;
    pub const INDICATOR_HEIGHT: f32 = 0.06;
    pub const INDICATOR_GAP: f32 = 0.03;
}
