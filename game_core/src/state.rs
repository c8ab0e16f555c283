//! Game State Machine
//!
//! The title screen leads into one of two play modes and there is no way
//! back. Each play variant owns exactly the entities that mode has, so a
//! paddle that does not exist in the current mode cannot be touched.

use crate::{press_key, release_key, Ball, Config, Key, Paddle, PaddleKeys};

/// Player-vs-player: two human paddles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PvpMatch {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

impl PvpMatch {
    pub fn new(config: &Config) -> Self {
        Self {
            left: Paddle::new(
                config.left_paddle_spawn(),
                config.paddle_size(),
                config.paddle_speed,
            ),
            right: Paddle::new(
                config.right_paddle_spawn(),
                config.paddle_size(),
                config.paddle_speed,
            ),
            ball: spawn_ball(config),
        }
    }
}

/// Player-vs-computer: a human paddle on the left, the computer on the right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PvcMatch {
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
}

impl PvcMatch {
    pub fn new(config: &Config) -> Self {
        Self {
            player: Paddle::new(
                config.left_paddle_spawn(),
                config.paddle_size(),
                config.paddle_speed,
            ),
            computer: Paddle::new(
                config.computer_paddle_spawn(),
                config.paddle_size(),
                config.computer_step,
            ),
            ball: spawn_ball(config),
        }
    }
}

fn spawn_ball(config: &Config) -> Ball {
    Ball::new(config.ball_start, config.ball_velocity, config.ball_diameter)
}

/// Game states
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    TitleScreen,
    PlayerVsPlayer(PvpMatch),
    PlayerVsComputer(PvcMatch),
}

/// Payload-free tag of a [`GameState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    TitleScreen,
    PlayerVsPlayer,
    PlayerVsComputer,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    StartPvp,
    StartPvc,
}

impl GameAction {
    /// Title screen key that requests this action
    pub fn from_key(key: Key) -> Option<GameAction> {
        match key {
            Key::Space => Some(GameAction::StartPvp),
            Key::Enter => Some(GameAction::StartPvc),
            _ => None,
        }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: StateKind,
    to_state: StateKind,
    action: GameAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> StateKind {
        self.from_state
    }

    pub fn to_state(&self) -> StateKind {
        self.to_state
    }

    pub fn action(&self) -> GameAction {
        self.action
    }
}

impl GameState {
    pub fn kind(&self) -> StateKind {
        match self {
            GameState::TitleScreen => StateKind::TitleScreen,
            GameState::PlayerVsPlayer(_) => StateKind::PlayerVsPlayer,
            GameState::PlayerVsComputer(_) => StateKind::PlayerVsComputer,
        }
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        next_state(self.kind(), action).is_some()
    }

    /// Attempt a transition, spawning the entities of the new mode
    pub fn transition(&mut self, action: GameAction, config: &Config) -> TransitionResult {
        let from_state = self.kind();
        let Some(to_state) = next_state(from_state, action) else {
            return TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            };
        };

        *self = match action {
            GameAction::StartPvp => GameState::PlayerVsPlayer(PvpMatch::new(config)),
            GameAction::StartPvc => GameState::PlayerVsComputer(PvcMatch::new(config)),
        };
        TransitionResult {
            success: true,
            from_state,
            to_state,
            action,
        }
    }

    /// Check if currently in a playing state
    pub fn is_playing(&self) -> bool {
        !matches!(self, GameState::TitleScreen)
    }

    pub fn ball(&self) -> Option<&Ball> {
        match self {
            GameState::TitleScreen => None,
            GameState::PlayerVsPlayer(m) => Some(&m.ball),
            GameState::PlayerVsComputer(m) => Some(&m.ball),
        }
    }

    /// Paddles on the field, left one first
    pub fn paddles(&self) -> Option<[&Paddle; 2]> {
        match self {
            GameState::TitleScreen => None,
            GameState::PlayerVsPlayer(m) => Some([&m.left, &m.right]),
            GameState::PlayerVsComputer(m) => Some([&m.player, &m.computer]),
        }
    }

    /// Route a movement key to the human paddle it is bound to, if present
    pub fn press(&mut self, key: Key) -> bool {
        match self {
            GameState::TitleScreen => false,
            GameState::PlayerVsPlayer(m) => {
                press_key(&mut m.left, PaddleKeys::LEFT, key)
                    || press_key(&mut m.right, PaddleKeys::RIGHT, key)
            }
            GameState::PlayerVsComputer(m) => press_key(&mut m.player, PaddleKeys::LEFT, key),
        }
    }

    /// Clear the intent of every existing human paddle bound to `key`
    pub fn release(&mut self, key: Key) -> bool {
        match self {
            GameState::TitleScreen => false,
            GameState::PlayerVsPlayer(m) => {
                let left = release_key(&mut m.left, PaddleKeys::LEFT, key);
                let right = release_key(&mut m.right, PaddleKeys::RIGHT, key);
                left || right
            }
            GameState::PlayerVsComputer(m) => release_key(&mut m.player, PaddleKeys::LEFT, key),
        }
    }
}

/// Get next state for a given action (if valid)
fn next_state(state: StateKind, action: GameAction) -> Option<StateKind> {
    match (state, action) {
        (StateKind::TitleScreen, GameAction::StartPvp) => Some(StateKind::PlayerVsPlayer),
        (StateKind::TitleScreen, GameAction::StartPvc) => Some(StateKind::PlayerVsComputer),
        // Play states are final for the life of the game
        _ => None,
    }
}
