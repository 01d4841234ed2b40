//! Latest-value input slot
//!
//! Pointer and touch handlers write here whenever they fire; the frame loop
//! reads once at the top of each step. Last write wins, nothing is queued.

use crate::sim::TickInput;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSlot {
    latest_y: f32,
}

impl InputSlot {
    pub fn new(initial_y: f32) -> Self {
        Self {
            latest_y: initial_y,
        }
    }

    /// Slot aimed at the vertical center of the board
    pub fn centered(tuning: &Tuning) -> Self {
        Self::new(tuning.board_height / 2.0)
    }

    /// Overwrite the desired paddle center. Non-finite samples are dropped.
    pub fn record(&mut self, y: f32) {
        if y.is_finite() {
            self.latest_y = y;
        }
    }

    pub fn sample(&self) -> f32 {
        self.latest_y
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput::new(self.latest_y)
    }
}

/// Map a client-space pointer y onto board units
///
/// `rect_top` and `rect_height` are the canvas' bounding client rect; when the
/// canvas is displayed at a different size than the board, the offset is
/// scaled. A collapsed rect leaves the offset unscaled.
pub fn pointer_to_board_y(client_y: f32, rect_top: f32, rect_height: f32, board_height: f32) -> f32 {
    let offset = client_y - rect_top;
    if rect_height > 0.0 {
        offset * board_height / rect_height
    } else {
        offset
    }
}
