//! Render-list emission
//!
//! The simulation's only output: one colored rectangle per entity, in a
//! fixed draw order the renderer can rely on. Dead balls are emitted too;
//! they sit off-screen and are harmlessly invisible, which keeps the list
//! length stable for a level.

use glam::{U8Vec4, Vec2};
use serde::{Deserialize, Serialize};

use super::state::{Entity, GameState};

/// A colored axis-aligned rectangle to render, min/max corners in
/// normalized world space
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DrawRect {
    pub min: Vec2,
    pub max: Vec2,
    pub color: U8Vec4,
}

impl From<&Entity> for DrawRect {
    fn from(entity: &Entity) -> Self {
        let aabb = entity.aabb();
        Self {
            min: aabb.min,
            max: aabb.max,
            color: entity.color,
        }
    }
}

/// Emit the frame's renderables: indicators, then all balls, then the paddle
pub fn draw_list(state: &GameState) -> Vec<DrawRect> {
    let mut rects = Vec::with_capacity(state.level_indicators.len() + state.balls.len() + 1);
    rects.extend(state.level_indicators.iter().map(DrawRect::from));
    rects.extend(state.balls.iter().map(DrawRect::from));
    rects.push(DrawRect::from(&state.paddle));
    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PADDLE_COLOR, PADDLE_HEIGHT, PADDLE_WIDTH};
    use crate::sim::levels::LEVELS;

    #[test]
    fn test_draw_order_and_count() {
        let mut state = GameState::new(5);
        state.reset_run();
        let rects = draw_list(&state);

        let indicators = state.level_indicators.len();
        let balls = state.balls.len();
        assert_eq!(rects.len(), indicators + balls + 1);

        // indicators first, paddle last
        for (rect, indicator) in rects.iter().zip(&state.level_indicators) {
            assert_eq!(rect.color, indicator.color);
        }
        let paddle = rects.last().unwrap();
        assert_eq!(paddle.color, PADDLE_COLOR);
        assert!((paddle.max.x - paddle.min.x - PADDLE_WIDTH).abs() < 1e-6);
        assert!((paddle.max.y - paddle.min.y - PADDLE_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_dead_balls_stay_in_the_list() {
        let mut state = GameState::new(5);
        state.reset_run();
        for ball in &mut state.balls {
            ball.alive = false;
        }
        let rects = draw_list(&state);
        assert_eq!(rects.len(), LEVELS.len() + state.balls.len() + 1);
    }

    #[test]
    fn test_rect_is_entity_bounding_box() {
        let state = GameState::new(5);
        let rect = DrawRect::from(&state.paddle);
        assert_eq!(rect.min, state.paddle.pos - state.paddle.size / 2.0);
        assert_eq!(rect.max, state.paddle.pos + state.paddle.size / 2.0);
    }
}
