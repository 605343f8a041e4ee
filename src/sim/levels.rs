//! Static level table and configuration-load-time validation
//!
//! Levels are a fixed table, not authorable at runtime. A bad entry is a
//! design-time configuration error: `validate` rejects it before the game
//! loop starts rather than letting it degenerate into division by zero in
//! the shrink step or a NaN launch velocity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_LAUNCH_VX;

/// Parameters for one difficulty level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelData {
    /// Balls allocated for the level
    pub balls_to_spawn: usize,
    /// Paddle-face hits that take the paddle from full width to the floor
    pub hits_to_lose: u32,
    /// Seconds between successive ball activations
    pub spawn_delay: f32,
    /// Upper bound on launch speed squared
    pub max_vel: f32,
}

/// The fixed level sequence, easiest first
pub static LEVELS: [LevelData; 5] = [
    LevelData { balls_to_spawn: 10, hits_to_lose: 10, spawn_delay: 2.5, max_vel: 1.0 },
    LevelData { balls_to_spawn: 15, hits_to_lose: 10, spawn_delay: 3.0, max_vel: 1.0 },
    LevelData { balls_to_spawn: 10, hits_to_lose: 10, spawn_delay: 2.0, max_vel: 2.0 },
    LevelData { balls_to_spawn: 5, hits_to_lose: 10, spawn_delay: 5.0, max_vel: 6.0 },
    // 10 very fast balls
    LevelData { balls_to_spawn: 10, hits_to_lose: 10, spawn_delay: 1.0, max_vel: 3.0 },
];

/// A level table entry that would produce degenerate gameplay
#[derive(Debug, Error, PartialEq)]
pub enum LevelTableError {
    #[error("level {level}: hits_to_lose must be positive")]
    ZeroHitsToLose { level: usize },
    #[error("level {level}: spawn_delay must be positive, got {value}")]
    NonPositiveSpawnDelay { level: usize, value: f32 },
    #[error("level {level}: max_vel {value} is below the minimum {min} needed to cover the horizontal launch range")]
    MaxVelTooSmall { level: usize, value: f32, min: f32 },
}

/// Check every entry of a level table against its preconditions.
///
/// `max_vel` must be at least `MAX_LAUNCH_VX²` so the derived vertical
/// launch speed `sqrt(max_vel - vx²)` is real for every sampled `vx`.
pub fn validate(levels: &[LevelData]) -> Result<(), LevelTableError> {
    let vx_bound = MAX_LAUNCH_VX * MAX_LAUNCH_VX;
    for (index, level) in levels.iter().enumerate() {
        if level.hits_to_lose == 0 {
            return Err(LevelTableError::ZeroHitsToLose { level: index });
        }
        if level.spawn_delay <= 0.0 {
            return Err(LevelTableError::NonPositiveSpawnDelay {
                level: index,
                value: level.spawn_delay,
            });
        }
        if level.max_vel < vx_bound {
            return Err(LevelTableError::MaxVelTooSmall {
                level: index,
                value: level.max_vel,
                min: vx_bound,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_table_is_valid() {
        assert_eq!(validate(&LEVELS), Ok(()));
    }

    #[test]
    fn test_rejects_zero_hits_to_lose() {
        let mut levels = LEVELS;
        levels[2].hits_to_lose = 0;
        assert_eq!(
            validate(&levels),
            Err(LevelTableError::ZeroHitsToLose { level: 2 })
        );
    }

    #[test]
    fn test_rejects_non_positive_spawn_delay() {
        let mut levels = LEVELS;
        levels[0].spawn_delay = 0.0;
        assert!(matches!(
            validate(&levels),
            Err(LevelTableError::NonPositiveSpawnDelay { level: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_max_vel_below_horizontal_range() {
        let mut levels = LEVELS;
        levels[4].max_vel = 0.2;
        assert!(matches!(
            validate(&levels),
            Err(LevelTableError::MaxVelTooSmall { level: 4, .. })
        ));
    }

    #[test]
    fn test_max_vel_at_exact_bound_is_valid() {
        let mut levels = LEVELS;
        levels[1].max_vel = 0.25;
        assert_eq!(validate(&levels), Ok(()));
    }
}
