//! Game state and core simulation types
//!
//! The whole world is one value: two paddles, one ball, the difficulty level
//! and the RNG that picks serve directions. Hosts own it and hand it to
//! [`tick`](super::tick::tick) once per frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::difficulty;
use crate::clamp_paddle_y;
use crate::tuning::Tuning;

/// Which paddle (and which score) something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    /// Pointer-controlled paddle on the left edge
    Player,
    /// Reactive paddle on the right edge
    Opponent,
}

/// A paddle entity
#[derive(Debug, Clone, Serialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge (fixed per side)
    pub x: f32,
    /// Top edge, always within `[0, board_height - height]`
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        let x = match side {
            Side::Player => tuning.player_x(),
            Side::Opponent => tuning.opponent_x(),
        };
        Self {
            side,
            x,
            y: tuning.centered_paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            score: 0,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Set the top edge, clamped into the board
    pub fn set_y(&mut self, y: f32, board_height: f32) {
        self.y = clamp_paddle_y(y, self.height, board_height);
    }

    /// Place the paddle so its vertical center sits on `target_y` (clamped)
    pub fn center_on(&mut self, target_y: f32, board_height: f32) {
        self.set_y(target_y - self.height / 2.0, board_height);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per step
    pub vel: Vec2,
    pub radius: f32,
    /// Speed for the current difficulty level; drives serves and paddle deflection
    pub speed: f32,
}

impl Ball {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            speed,
        }
    }

    /// Put the ball at `center` heading into a random diagonal quadrant
    pub fn serve(&mut self, center: Vec2, speed: f32, rng: &mut impl Rng) {
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = center;
        self.speed = speed;
        self.vel = Vec2::new(speed * sx, speed * sy);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    /// Difficulty level in `[1, tuning.max_level]`
    pub level: u32,
    /// Simulation step counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given balance and seed, ball already served
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let level = 1;
        let speed = difficulty::ball_speed(level, &tuning);
        let mut state = Self {
            seed,
            player: Paddle::new(Side::Player, &tuning),
            opponent: Paddle::new(Side::Opponent, &tuning),
            ball: Ball::new(tuning.ball_radius, speed),
            level,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };

        state.reset_ball();

        state
    }

    /// Default balance with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Tuning::default(), seed)
    }

    /// Center of the board
    pub fn board_center(&self) -> Vec2 {
        Vec2::new(self.tuning.board_width / 2.0, self.tuning.board_height / 2.0)
    }

    /// Serve from the center at the current level's speed in a fresh random direction
    pub fn reset_ball(&mut self) {
        let center = self.board_center();
        let speed = difficulty::ball_speed(self.level, &self.tuning);
        self.ball.serve(center, speed, &mut self.rng);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Read-only view handed to the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: (self.tuning.board_width, self.tuning.board_height),
            player: PaddleView::from(&self.player),
            opponent: PaddleView::from(&self.opponent),
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                radius: self.ball.radius,
            },
            level: self.level,
        }
    }
}

/// Paddle as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl From<&Paddle> for PaddleView {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.x,
            y: paddle.y,
            width: paddle.width,
            height: paddle.height,
            score: paddle.score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Everything the renderer may read from one frame
///
/// Geometry and scores only. Colors come from
/// [`Palette`](crate::settings::Palette) in [`Settings`](crate::Settings),
/// which the scene builder pairs with each snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    /// (width, height)
    pub board: (f32, f32),
    pub player: PaddleView,
    pub opponent: PaddleView,
    pub ball: BallView,
    pub level: u32,
}
