//! Axis-aligned collision detection and response
//!
//! One paddle against many balls. Per frame each alive ball is advanced by
//! explicit Euler, tested against the paddle with a standard AABB overlap,
//! and classified by which penetration axis is smallest: a vertical contact
//! is a scoring hit against the paddle face (bounce, damp, shrink), a
//! horizontal contact is a miss past the paddle's edge (ball out).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Entity;
use crate::consts::{BOUNCE_DAMP, HIT_FADE, OFFSCREEN_Y};

/// Axis-aligned bounding box, min/max corners
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Standard AABB intersection; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Which paddle face the ball struck, named by the smallest penetration axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFace {
    /// Ball's top edge past the paddle's bottom edge
    Top,
    /// Paddle's top edge past the ball's bottom edge
    Bottom,
    Left,
    Right,
}

impl ContactFace {
    pub fn is_vertical(self) -> bool {
        matches!(self, ContactFace::Top | ContactFace::Bottom)
    }
}

/// Outcome of a ball/paddle overlap this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallImpact {
    /// Vertical contact: the ball bounced off the paddle face and the
    /// paddle takes a shrink step
    FaceBounce,
    /// Horizontal contact: the ball slipped past the paddle's edge and is
    /// out of play
    EdgeOut,
}

/// Classify an overlap by penetration depth.
///
/// Exact ties between the vertical and horizontal minima resolve to the
/// vertical axis, so a perfectly symmetric corner hit counts as a face
/// bounce rather than falling through every strict comparison.
pub fn classify_contact(ball: &Aabb, paddle: &Aabb) -> ContactFace {
    let top = ball.max.y - paddle.min.y;
    let bottom = paddle.max.y - ball.min.y;
    let left = ball.max.x - paddle.min.x;
    let right = paddle.max.x - ball.min.x;

    if top.min(bottom) <= left.min(right) {
        if top <= bottom { ContactFace::Top } else { ContactFace::Bottom }
    } else if left <= right {
        ContactFace::Left
    } else {
        ContactFace::Right
    }
}

/// Advance one alive ball by `vel * dt` and resolve any paddle overlap.
///
/// On overlap the position delta is reverted first (prevents visually
/// sinking into the paddle), then the contact is classified. Returns what
/// happened so the driver can apply the paddle-shrink side effect.
pub fn step_ball(ball: &mut Entity, paddle: &Aabb, dt: f32) -> Option<BallImpact> {
    let delta = ball.vel * dt;
    ball.pos += delta;

    let ball_box = ball.aabb();
    if !ball_box.overlaps(paddle) {
        return None;
    }

    ball.pos -= delta;

    match classify_contact(&ball_box, paddle) {
        face if face.is_vertical() => {
            ball.vel.y = -ball.vel.y * BOUNCE_DAMP;
            ball.color.x = (ball.color.x as f32 * HIT_FADE) as u8;
            Some(BallImpact::FaceBounce)
        }
        _ => {
            ball.pos.y = OFFSCREEN_Y;
            ball.alive = false;
            Some(BallImpact::EdgeOut)
        }
    }
}

/// Reflective world boundary at [-1, 1] on both axes.
///
/// Velocity-conditioned, not position-clamped: a ball can sit briefly past
/// the boundary before its flipped velocity carries it back.
pub fn bounce_off_walls(pos: Vec2, vel: &mut Vec2) {
    if vel.y < 0.0 && pos.y < -1.0 {
        vel.y = -vel.y;
    } else if vel.y > 0.0 && pos.y > 1.0 {
        vel.y = -vel.y;
    } else if vel.x > 0.0 && pos.x > 1.0 {
        vel.x = -vel.x;
    } else if vel.x < 0.0 && pos.x < -1.0 {
        vel.x = -vel.x;
    }
}
