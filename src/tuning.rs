//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a host can swap in a
//! different board or difficulty curve without touching the step logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("tuning JSON is malformed")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("board must have positive size, got {width}x{height}")]
    BoardSize { width: f32, height: f32 },
    #[error("paddle {width}x{height} does not fit a {board_height} tall board")]
    PaddleSize {
        width: f32,
        height: f32,
        board_height: f32,
    },
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("ball radius must be positive, got {0}")]
    BallRadius(f32),
    #[error("ball of radius {radius} does not fit a {board_height} tall board")]
    BallTooLarge { radius: f32, board_height: f32 },
    #[error("board width {width} leaves no gap between the paddles, needs more than {needed}")]
    BoardTooNarrow { width: f32, needed: f32 },
    #[error("{name} must be positive, got {value}")]
    Speed { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("points_per_level and max_level must be at least 1")]
    LevelCurve,
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub board_width: f32,
    pub board_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side edge
    pub paddle_inset: f32,

    pub ball_radius: f32,
    /// Ball speed at level 1
    pub base_speed: f32,
    /// Opponent paddle speed at level 1
    pub base_opponent_speed: f32,
    /// Added to both speeds per level above 1
    pub speed_step: f32,
    pub dead_zone: f32,

    pub points_per_level: u32,
    pub max_level: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            ball_radius: BALL_RADIUS,
            base_speed: BASE_BALL_SPEED,
            base_opponent_speed: BASE_OPPONENT_SPEED,
            speed_step: SPEED_STEP,
            dead_zone: OPPONENT_DEAD_ZONE,
            points_per_level: POINTS_PER_LEVEL,
            max_level: MAX_DIFFICULTY_LEVEL,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse JSON, falling back to defaults (with a warning) on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Rejected tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_inset", self.paddle_inset),
            ("ball_radius", self.ball_radius),
            ("base_speed", self.base_speed),
            ("base_opponent_speed", self.base_opponent_speed),
            ("speed_step", self.speed_step),
            ("dead_zone", self.dead_zone),
        ] {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { name, value });
            }
        }
        if !(self.board_width > 0.0 && self.board_height > 0.0) {
            return Err(TuningError::BoardSize {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if !(self.paddle_width > 0.0
            && self.paddle_height > 0.0
            && self.paddle_height <= self.board_height)
        {
            return Err(TuningError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
                board_height: self.board_height,
            });
        }
        if !(self.ball_radius > 0.0) {
            return Err(TuningError::BallRadius(self.ball_radius));
        }
        if 2.0 * self.ball_radius >= self.board_height {
            return Err(TuningError::BallTooLarge {
                radius: self.ball_radius,
                board_height: self.board_height,
            });
        }
        for (name, value) in [("paddle_inset", self.paddle_inset), ("dead_zone", self.dead_zone)] {
            if value < 0.0 {
                return Err(TuningError::Negative { name, value });
            }
        }
        // Both paddles plus a full ball width must fit across the board
        let needed = 2.0 * (self.paddle_inset + self.paddle_width) + 2.0 * self.ball_radius;
        if needed >= self.board_width {
            return Err(TuningError::BoardTooNarrow {
                width: self.board_width,
                needed,
            });
        }
        for (name, value) in [
            ("base_speed", self.base_speed),
            ("base_opponent_speed", self.base_opponent_speed),
        ] {
            if !(value > 0.0) {
                return Err(TuningError::Speed { name, value });
            }
        }
        if self.speed_step < 0.0 {
            return Err(TuningError::Speed {
                name: "speed_step",
                value: self.speed_step,
            });
        }
        if self.points_per_level == 0 || self.max_level == 0 {
            return Err(TuningError::LevelCurve);
        }
        Ok(())
    }

    /// X of the player paddle's left edge
    pub fn player_x(&self) -> f32 {
        self.paddle_inset
    }

    /// X of the opponent paddle's left edge
    pub fn opponent_x(&self) -> f32 {
        self.board_width - self.paddle_width - self.paddle_inset
    }

    /// Paddle top edge that centers it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        self.board_height / 2.0 - self.paddle_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_level": 3, "board_width": 640 }"#).unwrap();
        assert_eq!(tuning.max_level, 3);
        assert_eq!(tuning.board_width, 640.0);
        assert_eq!(tuning.points_per_level, POINTS_PER_LEVEL);
        assert_eq!(tuning.speed_step, SPEED_STEP);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "board_height": 0 }"#),
            Err(TuningError::BoardSize { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "paddle_height": 900 }"#),
            Err(TuningError::PaddleSize { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "points_per_level": 0 }"#),
            Err(TuningError::LevelCurve)
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "base_speed": -1 }"#),
            Err(TuningError::Speed { name: "base_speed", .. })
        ));
        // 1e39 overflows f32 to infinity
        assert!(matches!(
            Tuning::from_json(r#"{ "board_width": 1e39 }"#),
            Err(TuningError::NotFinite { name: "board_width", .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "ball_radius": 450 }"#),
            Err(TuningError::BallTooLarge { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "ball_radius": 250 }"#),
            Err(TuningError::BallTooLarge { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "paddle_inset": 900 }"#),
            Err(TuningError::BoardTooNarrow { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "board_width": 60 }"#),
            Err(TuningError::BoardTooNarrow { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "paddle_inset": -5 }"#),
            Err(TuningError::Negative { name: "paddle_inset", .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "dead_zone": -50 }"#),
            Err(TuningError::Negative { name: "dead_zone", .. })
        ));
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse { .. })
        ));
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(Tuning::from_json_or_default("{"), Tuning::default());
    }

    #[test]
    fn test_paddle_positions() {
        let tuning = Tuning::default();
        assert_eq!(tuning.player_x(), 6.0);
        assert_eq!(tuning.opponent_x(), 800.0 - 12.0 - 6.0);
        assert_eq!(tuning.centered_paddle_y(), 200.0);
    }
}
