//! Platform layer
//!
//! Host-independent pieces of the browser glue:
//! - `input`: latest-value slot for the pointer/touch target
//! - `scheduler`: pausable one-step-per-frame loop and key bindings

pub mod input;
pub mod scheduler;

pub use input::{InputSlot, pointer_to_board_y};
pub use scheduler::{FrameOutcome, KeyAction, PauseTransition, Scheduler, key_action};
