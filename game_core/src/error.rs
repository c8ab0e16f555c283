use std::{error::Error, fmt::Display};

/// Reasons a [`Config`](crate::Config) cannot drive a game
#[derive(Debug)]
pub enum ConfigError {
    NonPositiveDimension(&'static str),
    NegativeSpeed(&'static str),
    SpeedTooLarge { name: &'static str, limit: i32 },
    CanvasTooLarge { width: i32, height: i32 },
    StartOutsideCanvas { name: &'static str, x: i32, y: i32 },
    PaddleTallerThanCanvas { paddle_height: i32, canvas_height: i32 },
    BallLargerThanCanvas { diameter: i32 },
    ServeOutsidePlayfield { x: i32, y: i32 },
    InvalidTickPeriod(f64),
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveDimension(name) => write!(f, "{name} must be positive"),
            ConfigError::NegativeSpeed(name) => write!(f, "{name} must not be negative"),
            ConfigError::SpeedTooLarge { name, limit } => {
                write!(f, "{name} must not exceed {limit} pixels per tick")
            }
            ConfigError::CanvasTooLarge { width, height } => write!(
                f,
                "canvas {width}x{height} exceeds {max} pixels per side",
                max = crate::Params::MAX_CANVAS_SIZE
            ),
            ConfigError::StartOutsideCanvas { name, x, y } => {
                write!(f, "{name} start ({x}, {y}) is outside the canvas")
            }
            ConfigError::PaddleTallerThanCanvas {
                paddle_height,
                canvas_height,
            } => write!(
                f,
                "paddle height {paddle_height} does not fit canvas height {canvas_height}"
            ),
            ConfigError::BallLargerThanCanvas { diameter } => {
                write!(f, "ball diameter {diameter} does not fit the canvas")
            }
            ConfigError::ServeOutsidePlayfield { x, y } => {
                write!(f, "serve point ({x}, {y}) puts the ball outside the playfield")
            }
            ConfigError::InvalidTickPeriod(ms) => write!(f, "invalid tick period {ms} ms"),
            ConfigError::Parse(err) => Display::fmt(err, f),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Parse(source) => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
