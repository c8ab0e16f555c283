use crate::{Ball, Events, Paddle, Playfield};

/// Reflect the ball horizontally if its box overlaps the paddle's.
///
/// The test has no notion of approach direction: a ball still inside the
/// paddle on the next tick is reflected again.
pub fn check_paddle_collision(ball: &mut Ball, paddle: &Paddle, events: &mut Events) -> bool {
    if !ball.rect().intersects(&paddle.rect()) {
        return false;
    }
    ball.vel.x = -ball.vel.x;
    events.ball_hit_paddle = true;
    log::trace!("ball hit paddle at {:?}", paddle.pos);
    true
}

/// Reflect the ball vertically once it has crossed the top or bottom edge
pub fn check_wall_collision(ball: &mut Ball, field: &Playfield, events: &mut Events) -> bool {
    if ball.pos.y >= 0 && ball.pos.y <= field.height - ball.diameter {
        return false;
    }
    ball.vel.y = -ball.vel.y;
    events.ball_hit_wall = true;
    log::trace!("ball hit wall at {:?}", ball.pos);
    true
}
