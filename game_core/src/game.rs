use crate::{
    check_paddle_collision, check_scoring, check_wall_collision, move_ball, move_paddle,
    track_ball, Ball, Config, Events, GameAction, GameRng, GameState, Key, Paddle, Playfield,
    Score, StateKind, TransitionResult,
};

/// The game controller: owns the state machine, the score and the per-tick
/// events, and is the only thing that mutates them.
pub struct Game {
    config: Config,
    field: Playfield,
    state: GameState,
    score: Score,
    events: Events,
    rng: GameRng,
    redraw: bool,
}

impl Game {
    /// Start on the title screen. The config is expected to be validated.
    pub fn new(config: Config) -> Self {
        Self {
            field: config.playfield(),
            rng: GameRng::new(config.rng_seed),
            config,
            state: GameState::TitleScreen,
            score: Score::new(),
            events: Events::new(),
            redraw: true,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// What happened during the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Leave the title screen for a play mode
    pub fn start(&mut self, action: GameAction) -> TransitionResult {
        let result = self.state.transition(action, &self.config);
        if result.success() {
            log::info!(
                "{:?} -> {:?} on {:?}",
                result.from_state(),
                result.to_state(),
                result.action()
            );
            self.redraw = true;
        }
        result
    }

    pub fn key_down(&mut self, key: Key) {
        match self.state.kind() {
            StateKind::TitleScreen => {
                if let Some(action) = GameAction::from_key(key) {
                    self.start(action);
                }
            }
            StateKind::PlayerVsPlayer | StateKind::PlayerVsComputer => {
                self.state.press(key);
            }
        }
        self.redraw = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.state.release(key);
        self.redraw = true;
    }

    /// Advance the simulation by one fixed tick
    pub fn tick(&mut self) {
        self.events.clear();

        match &mut self.state {
            GameState::TitleScreen => {}
            GameState::PlayerVsPlayer(m) => {
                move_paddle(&mut m.left, &self.field);
                move_paddle(&mut m.right, &self.field);
                advance_ball(
                    &mut m.ball,
                    [&m.left, &m.right],
                    &self.config,
                    &self.field,
                    &mut self.score,
                    &mut self.events,
                    &mut self.rng,
                );
            }
            GameState::PlayerVsComputer(m) => {
                move_paddle(&mut m.player, &self.field);
                track_ball(&mut m.computer, m.ball.center_y(), &self.field);
                advance_ball(
                    &mut m.ball,
                    [&m.player, &m.computer],
                    &self.config,
                    &self.field,
                    &mut self.score,
                    &mut self.events,
                    &mut self.rng,
                );
            }
        }

        self.redraw = true;
    }

    /// Whether anything changed since the last call; clears the request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

/// Scoring, motion, then paddle and wall collisions, in that order
fn advance_ball(
    ball: &mut Ball,
    paddles: [&Paddle; 2],
    config: &Config,
    field: &Playfield,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    check_scoring(ball, config, score, events, rng);
    move_ball(ball);
    for paddle in paddles {
        check_paddle_collision(ball, paddle, events);
    }
    check_wall_collision(ball, field, events);
}
