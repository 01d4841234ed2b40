//! Difficulty ramp
//!
//! The level is derived from the player's score alone, and both the ball and
//! the opponent paddle get `speed_step` faster per level.

use crate::tuning::Tuning;

/// `min(max_level, floor(score / points_per_level) + 1)`
pub fn level_for_score(player_score: u32, tuning: &Tuning) -> u32 {
    (player_score / tuning.points_per_level)
        .saturating_add(1)
        .min(tuning.max_level)
}

/// Ball speed at `level`
#[inline]
pub fn ball_speed(level: u32, tuning: &Tuning) -> f32 {
    tuning.base_speed + (level - 1) as f32 * tuning.speed_step
}

/// Opponent paddle speed at `level`
#[inline]
pub fn opponent_speed(level: u32, tuning: &Tuning) -> f32 {
    tuning.base_opponent_speed + (level - 1) as f32 * tuning.speed_step
}
