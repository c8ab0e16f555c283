use crate::{Ball, Config, Events, GameRng, Score};

/// Check if ball left the playfield (scoring)
pub fn check_scoring(
    ball: &mut Ball,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if ball.pos.x < 0 {
        // Right player scores
        score.increment_right();
        events.right_scored = true;
    } else if ball.pos.x > config.canvas_width - ball.diameter {
        // Left player scores
        score.increment_left();
        events.left_scored = true;
    } else {
        return;
    }
    log::debug!("score {}:{}", score.left, score.right);

    ball.reset(config.serve_point());
    if config.randomize_serve {
        ball.randomize_direction(rng);
    }
}
