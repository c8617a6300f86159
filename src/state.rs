//! Dial session state snapshot.

use crate::preset::PresetId;

/// Countdown timer sub-state.
///
/// `remaining_secs <= total_secs` always holds. A timer with
/// `remaining_secs == 0` is terminal and never running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds left before the faucet switches off.
    pub remaining_secs: u32,
    /// Seconds added since the timer was last cleared.
    pub total_secs: u32,
    /// Whether ticks are currently counting down.
    pub running: bool,
}

impl TimerState {
    /// Whether the countdown has finished (or never started).
    pub fn is_terminal(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Elapsed fraction in `[0, 1]`, for drawing a progress ring.
    pub fn progress(&self) -> f32 {
        if self.total_secs == 0 {
            return 0.0;
        }
        1.0 - self.remaining_secs as f32 / self.total_secs as f32
    }

    /// Remaining time formatted as `m:ss`.
    pub fn remaining_label(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

/// A snapshot of the dial session.
///
/// Obtain one with [`DialController::get_dial_state`](crate::DialController::get_dial_state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialState {
    /// Whether water is flowing.
    pub power_on: bool,
    /// Current dial value, always within the configured range.
    pub value: i32,
    /// Active preset; set only while powered on at exactly its value.
    pub selected_preset: Option<PresetId>,
    /// Countdown timer.
    pub timer: TimerState,
}

impl DialState {
    /// The state at screen mount: off, at `default_value`, no preset, zero timer.
    pub fn initial(default_value: i32) -> Self {
        Self {
            power_on: false,
            value: default_value,
            selected_preset: None,
            timer: TimerState::default(),
        }
    }

    /// Whether `id` is the active preset.
    pub fn is_selected(&self, id: PresetId) -> bool {
        self.selected_preset == Some(id)
    }
}
