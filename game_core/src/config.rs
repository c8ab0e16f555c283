use glam::IVec2;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Playfield};

/// Where the ball is put back after a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeReset {
    /// Both coordinates taken from half the canvas width, as the classic game did
    #[default]
    Legacy,
    /// True canvas centre
    Centre,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub computer_step: i32,
    pub left_paddle_x: i32,
    pub right_paddle_x: i32,
    pub paddle_start_y: i32,
    pub ball_diameter: i32,
    pub ball_start: IVec2,
    pub ball_velocity: IVec2,
    pub tick_ms: f64,
    pub max_ticks_per_frame: u32,
    pub serve_reset: ServeReset,
    pub randomize_serve: bool,
    pub rng_seed: u64,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            computer_step: Params::COMPUTER_STEP,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_x: Params::RIGHT_PADDLE_X,
            paddle_start_y: Params::PADDLE_START_Y,
            ball_diameter: Params::BALL_DIAMETER,
            ball_start: IVec2::new(Params::BALL_START_X, Params::BALL_START_Y),
            ball_velocity: IVec2::new(Params::BALL_VELOCITY_X, Params::BALL_VELOCITY_Y),
            tick_ms: Params::TICK_MS,
            max_ticks_per_frame: Params::MAX_TICKS_PER_FRAME,
            serve_reset: ServeReset::Legacy,
            randomize_serve: false,
            rng_seed: Params::DEFAULT_SEED,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_diameter", self.ball_diameter),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositiveDimension(name));
            }
        }
        if self.max_ticks_per_frame == 0 {
            return Err(ConfigError::NonPositiveDimension("max_ticks_per_frame"));
        }
        if self.canvas_width > Params::MAX_CANVAS_SIZE
            || self.canvas_height > Params::MAX_CANVAS_SIZE
        {
            return Err(ConfigError::CanvasTooLarge {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        for (name, value) in [
            ("paddle_speed", self.paddle_speed),
            ("computer_step", self.computer_step),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeSpeed(name));
            }
        }
        // One tick may cover at most the whole canvas
        for (name, value, limit) in [
            ("paddle_speed", self.paddle_speed, self.canvas_height),
            ("computer_step", self.computer_step, self.canvas_height),
            ("ball_velocity.x", self.ball_velocity.x, self.canvas_width),
            ("ball_velocity.y", self.ball_velocity.y, self.canvas_height),
        ] {
            if value.unsigned_abs() > limit.unsigned_abs() {
                return Err(ConfigError::SpeedTooLarge { name, limit });
            }
        }
        for (name, pos) in [
            ("ball_start", self.ball_start),
            ("left_paddle", self.left_paddle_spawn()),
            ("right_paddle", self.right_paddle_spawn()),
        ] {
            let on_canvas = (0..=self.canvas_width).contains(&pos.x)
                && (0..=self.canvas_height).contains(&pos.y);
            if !on_canvas {
                return Err(ConfigError::StartOutsideCanvas {
                    name,
                    x: pos.x,
                    y: pos.y,
                });
            }
        }
        if self.paddle_height > self.canvas_height {
            return Err(ConfigError::PaddleTallerThanCanvas {
                paddle_height: self.paddle_height,
                canvas_height: self.canvas_height,
            });
        }
        if self.ball_diameter >= self.canvas_width || self.ball_diameter >= self.canvas_height {
            return Err(ConfigError::BallLargerThanCanvas {
                diameter: self.ball_diameter,
            });
        }
        let serve = self.serve_point();
        if serve.x < 0
            || serve.y < 0
            || serve.x > self.canvas_width - self.ball_diameter
            || serve.y > self.canvas_height - self.ball_diameter
        {
            return Err(ConfigError::ServeOutsidePlayfield {
                x: serve.x,
                y: serve.y,
            });
        }
        if !self.tick_ms.is_finite() || self.tick_ms <= 0.0 {
            return Err(ConfigError::InvalidTickPeriod(self.tick_ms));
        }
        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.canvas_width, self.canvas_height)
    }

    pub fn paddle_size(&self) -> IVec2 {
        IVec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn left_paddle_spawn(&self) -> IVec2 {
        IVec2::new(self.left_paddle_x, self.paddle_start_y)
    }

    pub fn right_paddle_spawn(&self) -> IVec2 {
        IVec2::new(self.right_paddle_x, self.paddle_start_y)
    }

    /// Computer paddle starts vertically centred on the canvas
    pub fn computer_paddle_spawn(&self) -> IVec2 {
        IVec2::new(
            self.right_paddle_x,
            self.canvas_height / 2 - self.paddle_height / 2,
        )
    }

    /// Top-left corner the ball is moved to after a point
    pub fn serve_point(&self) -> IVec2 {
        let x = self.canvas_width / 2;
        match self.serve_reset {
            ServeReset::Legacy => IVec2::new(x, self.canvas_width / 2),
            ServeReset::Centre => IVec2::new(x, self.canvas_height / 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.playfield(), Playfield::new(800, 600));
    }

    #[test]
    fn test_spawn_positions() {
        let config = Config::new();
        assert_eq!(config.left_paddle_spawn(), IVec2::new(14, 240));
        assert_eq!(config.right_paddle_spawn(), IVec2::new(760, 240));
        assert_eq!(config.computer_paddle_spawn(), IVec2::new(760, 260));
        assert_eq!(config.ball_start, IVec2::new(400, 300));
    }

    #[test]
    fn test_legacy_serve_uses_width_twice() {
        let config = Config::new();
        assert_eq!(config.serve_point(), IVec2::new(400, 400));
    }

    #[test]
    fn test_centre_serve_uses_height() {
        let config = Config {
            serve_reset: ServeReset::Centre,
            ..Config::new()
        };
        assert_eq!(config.serve_point(), IVec2::new(400, 300));
    }

    #[test]
    fn test_from_json_fills_missing_fields_with_defaults() {
        let config = Config::from_json(
            r#"{ "ball_velocity": [-5, 3], "serve_reset": "centre", "log_level": "DEBUG" }"#,
        )
        .unwrap();
        assert_eq!(config.ball_velocity, IVec2::new(-5, 3));
        assert_eq!(config.serve_reset, ServeReset::Centre);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.canvas_width, Params::CANVAS_WIDTH);
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_paddle_taller_than_canvas_is_rejected() {
        let config = Config {
            paddle_height: 700,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTallerThanCanvas {
                paddle_height: 700,
                canvas_height: 600
            })
        ));
    }

    #[test]
    fn test_legacy_serve_on_short_canvas_is_rejected() {
        // Width 800 puts the legacy serve at y = 400, below a 300 high canvas
        let config = Config {
            canvas_height: 300,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ServeOutsidePlayfield { x: 400, y: 400 })
        ));
    }

    #[test]
    fn test_non_positive_values_are_rejected() {
        let zero_ball = Config {
            ball_diameter: 0,
            ..Config::new()
        };
        assert!(matches!(
            zero_ball.validate(),
            Err(ConfigError::NonPositiveDimension("ball_diameter"))
        ));

        let bad_tick = Config {
            tick_ms: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            bad_tick.validate(),
            Err(ConfigError::InvalidTickPeriod(_))
        ));

        let reversed = Config {
            paddle_speed: -1,
            ..Config::new()
        };
        assert_eq!(
            reversed.validate().unwrap_err().to_string(),
            "paddle_speed must not be negative"
        );
    }

    #[test]
    fn test_max_ticks_above_i32_range_is_accepted() {
        let config = Config {
            max_ticks_per_frame: u32::MAX,
            ..Config::new()
        };
        assert!(config.validate().is_ok());

        let zero = Config {
            max_ticks_per_frame: 0,
            ..Config::new()
        };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::NonPositiveDimension("max_ticks_per_frame"))
        ));
    }

    #[test]
    fn test_speeds_beyond_the_canvas_are_rejected() {
        let err = Config::from_json(r#"{ "ball_velocity": [2147483647, 0] }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SpeedTooLarge {
                name: "ball_velocity.x",
                limit: 800
            }
        ));

        let err = Config::from_json(r#"{ "ball_velocity": [4, -2147483648] }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SpeedTooLarge {
                name: "ball_velocity.y",
                ..
            }
        ));

        let err = Config::from_json(r#"{ "paddle_speed": 2147483647 }"#).unwrap_err();
        assert_eq!(err.to_string(), "paddle_speed must not exceed 600 pixels per tick");

        let fastest = Config {
            ball_velocity: IVec2::new(800, -600),
            computer_step: 600,
            ..Config::new()
        };
        assert!(fastest.validate().is_ok());
    }

    #[test]
    fn test_oversized_canvas_is_rejected() {
        let config = Config {
            canvas_width: i32::MAX,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn test_start_positions_outside_canvas_are_rejected() {
        let ball = Config {
            ball_start: IVec2::new(i32::MAX, 300),
            ..Config::new()
        };
        assert!(matches!(
            ball.validate(),
            Err(ConfigError::StartOutsideCanvas {
                name: "ball_start",
                ..
            })
        ));

        let paddle = Config {
            paddle_start_y: -1,
            ..Config::new()
        };
        assert!(matches!(
            paddle.validate(),
            Err(ConfigError::StartOutsideCanvas {
                name: "left_paddle",
                x: 14,
                y: -1
            })
        ));
    }
}
