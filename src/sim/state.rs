//! Game state and core simulation types
//!
//! Everything that persists between frames lives here, including the spawn
//! timers and the RNG, so multiple independent simulations can coexist and
//! tests can drive one deterministically.

use glam::{U8Vec4, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::levels::{LEVELS, LevelData};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// Waiting for the first click
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, won or lost; terminal until restart
    GameOver,
}

/// What an entity is for. All three share position, bounding-box, and color
/// semantics; only balls use `alive` meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Paddle,
    Ball,
    Indicator,
}

/// A rectangular world entity (paddle, ball, or level indicator)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Center, normalized [-1, 1] world space
    pub pos: Vec2,
    /// Units per second; zero for the paddle and indicators
    pub vel: Vec2,
    /// (width, height), always positive; only the paddle's width mutates
    pub size: Vec2,
    /// RGBA
    pub color: U8Vec4,
    /// A dead ball is excluded from motion, collision, and the win check
    /// but stays allocated until the level is reallocated
    pub alive: bool,
    pub role: Role,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, color: U8Vec4, role: Role) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            color,
            alive: true,
            role,
        }
    }

    /// Axis-aligned bounding box from `pos ± size/2`
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// Complete game state for one run-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded once at construction, advanced once per draw, never reseeded
    pub rng: Pcg32,
    pub progress: Progress,
    /// Player paddle; x follows the pointer, y is fixed, width shrinks
    pub paddle: Entity,
    /// Balls for the current level; indices are stable for the level's
    /// duration (`spawn_cursor` indexes into this)
    pub balls: Vec<Entity>,
    /// 0-based index into [`LEVELS`]
    pub level_index: usize,
    /// One decorative bar per level, recolored as levels clear; allocated
    /// once, colors reset on restart
    pub level_indicators: Vec<Entity>,
    /// Next ball awaiting activation this level
    pub spawn_cursor: usize,
    /// Seconds since the last activation
    pub spawn_timer: f32,
    /// Seconds since the current level started
    pub level_cooldown: f32,
}

impl GameState {
    /// Create a fresh state in the menu with no balls allocated
    pub fn new(seed: u64) -> Self {
        let paddle = Entity::new(
            Vec2::ZERO,
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            PADDLE_COLOR,
            Role::Paddle,
        );

        // Alternating green/red bars decorate the menu; a live run recolors
        // them black (uncleared) and white (cleared)
        let count = LEVELS.len();
        let slot = 2.0 / count as f32;
        let level_indicators = (0..count)
            .map(|i| {
                let color = if i % 2 == 0 {
                    U8Vec4::new(0x00, 0xFF, 0x00, 0xFF)
                } else {
                    U8Vec4::new(0xFF, 0x00, 0x00, 0xFF)
                };
                Entity::new(
                    Vec2::new(-1.0 + i as f32 * slot + slot / 2.0, INDICATOR_Y),
                    Vec2::new(slot - INDICATOR_GAP, INDICATOR_HEIGHT),
                    color,
                    Role::Indicator,
                )
            })
            .collect();

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            progress: Progress::Menu,
            paddle,
            balls: Vec::new(),
            level_index: 0,
            level_indicators,
            spawn_cursor: 0,
            spawn_timer: 0.0,
            level_cooldown: 0.0,
        }
    }

    /// Parameters of the current level
    pub fn level(&self) -> &'static LevelData {
        &LEVELS[self.level_index]
    }

    /// Paddle width at the start of every level
    pub fn max_paddle_width(&self) -> f32 {
        PADDLE_WIDTH
    }

    /// Width floor; at or below this the run is lost
    pub fn min_paddle_width(&self) -> f32 {
        self.paddle.size.y
    }

    /// Start or restart a run from the menu or game-over screen.
    ///
    /// The win-unlock paddle recolor is deliberately not reset; it carries
    /// across restarts.
    pub fn reset_run(&mut self) {
        self.progress = Progress::Playing;
        self.level_index = 0;
        self.paddle.size.x = self.max_paddle_width();

        for indicator in &mut self.level_indicators {
            indicator.color.x = 0x00;
            indicator.color.y = 0x00;
            indicator.color.z = 0x00;
        }

        self.spawn_timer = 0.0;
        self.level_cooldown = FIRST_COOLDOWN_CREDIT;
        self.allocate_balls();

        log::info!("run started (seed {})", self.seed);
    }

    /// Reallocate the ball sequence for the current level. All balls start
    /// parked off-screen, alive, with zero velocity: inert until activated.
    pub fn allocate_balls(&mut self) {
        self.spawn_cursor = 0;
        self.balls.clear();
        for _ in 0..self.level().balls_to_spawn {
            self.balls.push(Entity::new(
                OFFSCREEN,
                Vec2::splat(BALL_SIZE),
                BALL_COLOR,
                Role::Ball,
            ));
        }
    }

    /// A level is cleared once every allocated ball has been activated and
    /// deactivated. Balls awaiting activation are still alive, so they hold
    /// the check open.
    pub fn all_balls_cleared(&self) -> bool {
        self.balls.iter().all(|ball| !ball.alive)
    }

    /// One paddle-shrink step; entering the floor loses the run
    pub fn shrink_paddle(&mut self) {
        let span = self.max_paddle_width() - self.min_paddle_width();
        self.paddle.size.x -= span / self.level().hits_to_lose as f32 + SHRINK_EPSILON;

        if self.paddle.size.x <= self.min_paddle_width() {
            self.progress = Progress::GameOver;
            log::info!("paddle worn down on level {}, run lost", self.level_index);
        }
    }

    /// Advance past a cleared level: highlight its indicator and either move
    /// to the next level or end the run in the won state.
    pub fn advance_level(&mut self) {
        let indicator = &mut self.level_indicators[self.level_index];
        indicator.color.x = 0xFF;
        indicator.color.y = 0xFF;
        indicator.color.z = 0xFF;

        self.level_index += 1;
        self.level_cooldown = 0.0;

        if self.level_index == LEVELS.len() {
            self.progress = Progress::GameOver;
            // unlock the blue paddle
            self.paddle.color = PADDLE_WIN_COLOR;
            log::info!("all levels cleared, run won");
        } else {
            self.paddle.size.x = self.max_paddle_width();
            self.allocate_balls();
            log::info!("advanced to level {}", self.level_index);
        }
    }
}
