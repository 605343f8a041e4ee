//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-frame elapsed time is an input, never sampled internally
//! - Seeded RNG only, owned by the game state and advanced once per draw
//! - Timers are explicit fields on the state, never hidden statics
//! - No rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod scene;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, BallImpact, ContactFace};
pub use levels::{LEVELS, LevelData, LevelTableError};
pub use scene::{DrawRect, draw_list};
pub use spawn::LaunchSample;
pub use state::{Entity, GameState, Progress, Role};
pub use tick::{FrameInput, tick};
