//! Pausable frame scheduler
//!
//! The host calls [`Scheduler::run_frame`] from its animation-frame callback
//! and only asks for another callback when the outcome says so. Pausing just
//! stops that chain; resuming restarts it with the world untouched, so paused
//! time has no effect on the simulation.

use super::input::InputSlot;
use crate::settings::Settings;
use crate::sim::{GameState, StepReport, TickInput, demo_target_y, tick};

/// Result of toggling pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseTransition {
    Paused,
    /// `request_frame` is false when a callback is still pending from before
    /// the pause and will pick the loop back up itself
    Resumed { request_frame: bool },
}

/// Result of one frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Stepped(StepReport),
    Paused,
}

impl FrameOutcome {
    /// Whether the host should request another animation frame
    pub fn wants_next_frame(&self) -> bool {
        matches!(self, FrameOutcome::Stepped(_))
    }
}

/// Keyboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    /// Let the player paddle follow the ball
    ToggleDemo,
}

pub fn key_action(key: &str, settings: &Settings) -> Option<KeyAction> {
    if settings.is_pause_key(key) {
        return Some(KeyAction::TogglePause);
    }
    match key {
        "i" | "I" => Some(KeyAction::ToggleDemo),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    paused: bool,
    demo: bool,
    frame_pending: bool,
    /// Frames stepped so far
    frames: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_demo(&self) -> bool {
        self.demo
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn set_demo(&mut self, demo: bool) {
        self.demo = demo;
    }

    pub fn toggle_demo(&mut self) -> bool {
        self.demo = !self.demo;
        log::info!("Demo mode: {}", self.demo);
        self.demo
    }

    /// Begin the loop. Returns true if the host should request the first frame.
    pub fn start(&mut self) -> bool {
        if self.frame_pending || self.paused {
            return false;
        }
        self.frame_pending = true;
        true
    }

    pub fn toggle_pause(&mut self) -> PauseTransition {
        if self.paused {
            self.paused = false;
            let request_frame = !self.frame_pending;
            self.frame_pending = true;
            log::info!("Resumed");
            PauseTransition::Resumed { request_frame }
        } else {
            self.paused = true;
            log::info!("Paused after {} frames", self.frames);
            PauseTransition::Paused
        }
    }

    /// One animation-frame callback: step once, then render once
    pub fn run_frame<F>(
        &mut self,
        state: &mut GameState,
        input: &InputSlot,
        mut render: F,
    ) -> FrameOutcome
    where
        F: FnMut(&GameState),
    {
        self.frame_pending = false;
        if self.paused {
            return FrameOutcome::Paused;
        }

        let target_y = if self.demo {
            demo_target_y(state)
        } else {
            input.sample()
        };
        let report = tick(state, &TickInput::new(target_y));
        render(state);

        self.frames += 1;
        self.frame_pending = true;
        FrameOutcome::Stepped(report)
    }
}
