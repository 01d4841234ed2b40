//! Fixed step simulation tick
//!
//! One call advances the world by exactly one logical step. There is no
//! delta time: velocities are displacements per step, and the host calls
//! [`tick`] once per display refresh.

use super::collision::{
    ball_outside_vertical, ball_overlaps_paddle, bounce_off_wall, deflect_off_paddle,
    scoring_side,
};
use super::difficulty;
use super::state::{GameState, Side};

/// Input for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Desired vertical center of the player paddle (latest pointer sample)
    pub player_target_y: f32,
}

impl TickInput {
    pub fn new(player_target_y: f32) -> Self {
        Self { player_target_y }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Ball touched the top or bottom edge
    pub wall_bounce: bool,
    /// Last paddle the ball bounced off this step
    pub paddle_hit: Option<Side>,
    /// Side that won a point
    pub scored: Option<Side>,
    /// New difficulty level, when this step changed it
    pub level_up: Option<u32>,
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState, input: &TickInput) -> StepReport {
    let mut report = StepReport::default();
    state.time_ticks += 1;

    move_player(state, input.player_target_y);
    move_opponent(state);

    // Single Euler step; fast balls can tunnel through a paddle
    let vel = state.ball.vel;
    state.ball.pos += vel;

    if ball_outside_vertical(&state.ball, state.tuning.board_height) {
        bounce_off_wall(&mut state.ball);
        report.wall_bounce = true;
    }

    for side in [Side::Player, Side::Opponent] {
        let paddle = state.paddle(side);
        if ball_overlaps_paddle(&state.ball, paddle) {
            let paddle = paddle.clone();
            deflect_off_paddle(&mut state.ball, &paddle);
            report.paddle_hit = Some(side);
        }
    }

    if let Some(side) = scoring_side(&state.ball, state.tuning.board_width) {
        award_point(state, side);
        report.scored = Some(side);
        if side == Side::Player {
            report.level_up = recompute_difficulty(state);
        }
        state.reset_ball();
    }

    report
}

/// Center the player paddle on the pointer, clamped to the board
pub fn move_player(state: &mut GameState, target_y: f32) {
    let board_height = state.tuning.board_height;
    state.player.center_on(target_y, board_height);
}

/// Dead-zone controller: chase the ball's current y at the level's speed
pub fn move_opponent(state: &mut GameState) {
    let speed = difficulty::opponent_speed(state.level, &state.tuning);
    let dead_zone = state.tuning.dead_zone;
    let board_height = state.tuning.board_height;
    let ball_y = state.ball.pos.y;

    let paddle = &mut state.opponent;
    let center = paddle.center_y();
    let y = if ball_y < center - dead_zone {
        paddle.y - speed
    } else if ball_y > center + dead_zone {
        paddle.y + speed
    } else {
        paddle.y
    };
    paddle.set_y(y, board_height);
}

/// Credit one point to `side`
pub fn award_point(state: &mut GameState, side: Side) {
    let paddle = state.paddle_mut(side);
    paddle.score = paddle.score.saturating_add(1);
    log::info!(
        "{:?} scored ({} - {})",
        side,
        state.player.score,
        state.opponent.score
    );
}

/// Re-derive the level from the player's score
///
/// When the level changes the ball speed is updated right away; the ball in
/// flight keeps its velocity until the next serve. Returns the new level if
/// it changed.
pub fn recompute_difficulty(state: &mut GameState) -> Option<u32> {
    let level = difficulty::level_for_score(state.player.score, &state.tuning);
    if level == state.level {
        return None;
    }
    state.level = level;
    state.ball.speed = difficulty::ball_speed(level, &state.tuning);
    log::info!(
        "Difficulty level {} (ball speed {:.1}, opponent speed {:.1})",
        level,
        state.ball.speed,
        difficulty::opponent_speed(level, &state.tuning)
    );
    Some(level)
}

/// Player target for demo mode: follow the ball
pub fn demo_target_y(state: &GameState) -> f32 {
    state.ball.pos.y
}
