//! Radial dial control and session state for a smart faucet remote.
//!
//! This crate holds the logic behind the remote-control screen: a gesture
//! driven temperature dial, a power switch, one-tap presets and a countdown
//! timer that shuts the water off.
//!
//! # Overview
//!
//! - [`mapper`] converts pointer positions into dial angles and values.
//! - [`DialSession`] owns the session state and applies the transition table
//!   in [`reduce`].
//! - [`SessionRunner`] adds the 1 Hz tick source that drives the timer.
//!
//! # Example
//!
//! ```
//! use faucet_core::{DialConfig, DialController, DialSession, TemperatureBand};
//!
//! fn main() -> Result<(), faucet_core::DialError> {
//!     let mut session = DialSession::new(DialConfig::default())?;
//!
//!     // Presets power the faucet on at their value
//!     session.on_preset_select("hot-105");
//!     assert!(session.get_dial_state().power_on);
//!     assert_eq!(session.band(), TemperatureBand::Hot);
//!
//!     // Add a minute to the shut-off timer
//!     session.on_add_minute();
//!     assert_eq!(session.get_dial_state().timer.remaining_label(), "1:00");
//!
//!     // Power off resets everything
//!     session.on_power_toggle();
//!     assert_eq!(session.get_dial_state().value, 65);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Gestures
//!
//! The rendering layer reports where the dial center is and then forwards
//! raw pointer positions:
//!
//! ```
//! use faucet_core::{DialController, DialSession};
//!
//! let mut session = DialSession::default();
//! session.set_dial_center(100.0, 100.0);
//! session.on_power_toggle();
//!
//! // Straight up is the middle of the arc
//! session.on_gesture(100.0, 20.0);
//! assert_eq!(session.get_dial_state().value, 85);
//! ```

#![warn(missing_docs)]

mod band;
mod config;
mod controller;
mod error;
pub mod mapper;
mod preset;
mod range;
mod reducer;
mod runner;
mod state;
mod ticker;

// Re-export public API
pub use band::{ColorBands, HOT_FROM, TemperatureBand, WARM_FROM};
pub use config::{DEFAULT_VALUE, DialConfig, TIMER_INCREMENT_SECS};
pub use controller::{DialController, DialSession};
pub use error::DialError;
pub use preset::{DisplayMode, Preset, PresetCatalog, PresetId};
pub use range::{DialRange, END_ANGLE, MAX_VALUE, MIN_VALUE, START_ANGLE};
pub use reducer::{DialEvent, reduce};
pub use runner::SessionRunner;
pub use state::{DialState, TimerState};
pub use ticker::Ticker;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_same_preset_twice_returns_to_off() {
        let mut session = DialSession::default();
        let off = session.get_dial_state();

        session.on_preset_select("brushing-teeth-75");
        assert!(session.get_dial_state().power_on);
        session.on_preset_select("brushing-teeth-75");
        assert_eq!(session.get_dial_state(), off);

        // and the pair can repeat
        session.on_preset_select("brushing-teeth-75");
        session.on_preset_select("brushing-teeth-75");
        assert_eq!(session.get_dial_state(), off);
    }

    #[test]
    fn test_preset_status_follows_selection() {
        let catalog = PresetCatalog::builtin();
        let mut session = DialSession::default();
        session.on_preset_select("grooming-90");

        let state = session.get_dial_state();
        let active: Vec<_> = catalog
            .all()
            .iter()
            .filter(|p| state.is_selected(p.id))
            .map(|p| p.label)
            .collect();
        assert_eq!(active, vec!["Grooming"]);
    }

    #[test]
    fn test_value_stays_in_range_under_mixed_input() {
        let mut session = DialSession::default();
        session.set_dial_center(0.0, 0.0);
        session.on_power_toggle();

        let range = session.config().range;
        for i in 0..200 {
            match i % 4 {
                0 => session.on_step_value(7),
                1 => session.on_gesture((i as f32).cos() * 50.0, (i as f32).sin() * 50.0),
                2 => session.on_step_value(-11),
                _ => session.on_timer_tick(),
            }
            assert!(range.contains(session.get_dial_state().value));
        }
    }

    #[test]
    fn test_timer_never_reaches_zero_while_running() {
        let mut session = DialSession::default();
        session.on_add_minute();
        session.on_add_minute();
        for _ in 0..200 {
            session.on_timer_tick();
            let timer = session.get_dial_state().timer;
            assert!(timer.remaining_secs <= timer.total_secs);
            assert!(!(timer.remaining_secs == 0 && timer.running));
        }
        assert!(!session.get_dial_state().power_on);
    }
}
