use std::cmp::Ordering;

use crate::{Paddle, Playfield};

/// Computer opponent: step the paddle centre toward `target_y` by its speed.
///
/// No prediction of where the ball will cross, and the full step is taken
/// even when the target is closer than that, so the paddle can hover around
/// a still target.
pub fn track_ball(paddle: &mut Paddle, target_y: i32, field: &Playfield) {
    let delta = match paddle.center_y().cmp(&target_y) {
        Ordering::Less => paddle.speed,
        Ordering::Greater => -paddle.speed,
        Ordering::Equal => 0,
    };
    paddle.pos.y = field.clamp_y(paddle.pos.y + delta, paddle.size.y);
}
