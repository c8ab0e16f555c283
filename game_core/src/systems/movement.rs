use crate::{Ball, Paddle, Playfield};

/// Apply paddle movement based on intents
pub fn move_paddle(paddle: &mut Paddle, field: &Playfield) {
    let velocity = paddle.velocity();
    if velocity != 0 {
        // Clamp to playfield bounds
        paddle.pos.y = field.clamp_y(paddle.pos.y + velocity, paddle.size.y);
    }
}

/// Move ball based on velocity; walls are handled by the collision pass
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}
