//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed logical step per call, no delta time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::{ball_overlaps_paddle, deflect_off_paddle, scoring_side};
pub use difficulty::{ball_speed, level_for_score, opponent_speed};
pub use state::{Ball, BallView, GameState, Paddle, PaddleView, Side, Snapshot};
pub use tick::{StepReport, TickInput, demo_target_y, tick};
