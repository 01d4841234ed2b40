//! Canvas Pong - a two-paddle ball game on a 2D canvas
//!
//! Core modules:
//! - `sim`: Simulation step (paddles, ball, collisions, scoring, difficulty)
//! - `renderer`: Draw commands built from a read-only snapshot of the world
//! - `platform`: Latest-value input slot and the pausable frame scheduler
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences (colors, HUD, key bindings)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side edge
    pub const PADDLE_INSET: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Ball speed at level 1 (units per step)
    pub const BASE_BALL_SPEED: f32 = 5.0;

    /// Opponent speed at level 1 (units per step)
    pub const BASE_OPPONENT_SPEED: f32 = 4.0;
    /// Opponent ignores the ball while it is within this distance of its center
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;

    /// Added to ball and opponent speed for every level above 1
    pub const SPEED_STEP: f32 = 0.7;
    /// Player points needed per level
    pub const POINTS_PER_LEVEL: u32 = 5;
    pub const MAX_DIFFICULTY_LEVEL: u32 = 10;
}

/// Clamp a paddle's top edge so the whole paddle stays on the board
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, board_height: f32) -> f32 {
    y.max(0.0).min(board_height - paddle_height)
}
