//! Collision detection and response
//!
//! Everything is axis aligned: the ball is treated as its bounding box when
//! tested against a paddle rectangle or the board edges.

use super::state::{Ball, Paddle, Side};

/// Ball's bounding box overlaps the paddle rectangle (strict inequalities)
pub fn ball_overlaps_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let r = ball.radius;
    ball.pos.x - r < paddle.x + paddle.width
        && ball.pos.x + r > paddle.x
        && ball.pos.y - r < paddle.y + paddle.height
        && ball.pos.y + r > paddle.y
}

/// Ball pokes past the top or bottom edge
pub fn ball_outside_vertical(ball: &Ball, board_height: f32) -> bool {
    ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > board_height
}

/// Flip vertical velocity. Position is left alone, so the ball may sit past
/// the edge for a frame.
pub fn bounce_off_wall(ball: &mut Ball) {
    ball.vel.y = -ball.vel.y;
}

/// Where on the paddle face the ball struck, -1 (top edge) to 1 (bottom edge)
///
/// The bounding-box test lets the ball's center sit up to one radius beyond
/// the paddle ends, so the ratio is clamped.
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    ((ball.pos.y - paddle.center_y()) / half).clamp(-1.0, 1.0)
}

/// Send the ball back off a paddle it overlaps
///
/// The ball is moved just outside the paddle's inner face so the next step
/// cannot register the same hit again. Horizontal velocity flips and vertical
/// velocity is set from the hit position.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle) {
    ball.pos.x = match paddle.side {
        Side::Player => paddle.x + paddle.width + ball.radius,
        Side::Opponent => paddle.x - ball.radius,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y = ball.speed * hit_offset(ball, paddle);
}

/// Which side earns a point if the ball has crossed a side edge
///
/// Left edge is checked first, so at most one side scores.
pub fn scoring_side(ball: &Ball, board_width: f32) -> Option<Side> {
    if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Opponent)
    } else if ball.pos.x + ball.radius > board_width {
        Some(Side::Player)
    } else {
        None
    }
}
