//! Dial session and the interface the renderer drives it through.

use crate::band::TemperatureBand;
use crate::config::DialConfig;
use crate::error::DialError;
use crate::mapper;
use crate::reducer::{DialEvent, reduce};
use crate::state::DialState;

use log::{debug, trace, warn};

// =============================================================================
// Dial Controller Trait
// =============================================================================

/// The operations a rendering layer invokes on a dial session.
///
/// Every method is synchronous and applies exactly one transition. None of
/// them fail: input that does not apply in the current state is ignored.
pub trait DialController {
    /// Get a snapshot of the current session state.
    fn get_dial_state(&self) -> DialState;

    /// The configuration the session was built with.
    fn config(&self) -> &DialConfig;

    /// A drag gesture reached `(pointer_x, pointer_y)`.
    fn on_gesture(&mut self, pointer_x: f32, pointer_y: f32);

    /// The power button was pressed.
    fn on_power_toggle(&mut self);

    /// A preset tile was pressed.
    fn on_preset_select(&mut self, id: &str);

    /// The add-time button was pressed.
    fn on_add_minute(&mut self);

    /// The pause/resume button was pressed.
    fn on_timer_pause_toggle(&mut self);

    /// A ± button was pressed; `delta` is counted in steps.
    fn on_step_value(&mut self, delta: i32);

    /// One period of the tick source elapsed.
    fn on_timer_tick(&mut self);

    /// Colour band of the current value.
    fn band(&self) -> TemperatureBand {
        self.config()
            .bands
            .band_for_value(self.get_dial_state().value)
    }

    /// Gauge angle of the current value, for drawing the knob.
    fn dial_angle(&self) -> f32 {
        let config = self.config();
        mapper::angle_for_value(self.get_dial_state().value, &config.range)
    }
}

// =============================================================================
// DialSession
// =============================================================================

/// The state of one remote-control screen, from mount to unmount.
///
/// # Example
///
/// ```
/// use faucet_core::{DialConfig, DialController, DialSession};
///
/// let mut session = DialSession::new(DialConfig::default())?;
/// session.on_preset_select("hot-105");
/// assert_eq!(session.get_dial_state().value, 105);
/// # Ok::<(), faucet_core::DialError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DialSession {
    config: DialConfig,
    state: DialState,
    center: (f32, f32),
}

impl DialSession {
    /// Create a session in its mount state.
    ///
    /// # Errors
    ///
    /// Returns the first problem [`DialConfig::validate`] finds.
    pub fn new(config: DialConfig) -> Result<Self, DialError> {
        config.validate()?;
        debug!(
            "dial session created: range {}-{}, default {}",
            config.range.min(),
            config.range.max(),
            config.default_value
        );
        Ok(Self {
            state: DialState::initial(config.default_value),
            config,
            center: (0.0, 0.0),
        })
    }

    /// Tell the session where the dial center is, in gesture coordinates.
    pub fn set_dial_center(&mut self, x: f32, y: f32) {
        self.center = (x, y);
    }

    /// The dial center used to resolve gestures.
    pub fn dial_center(&self) -> (f32, f32) {
        self.center
    }

    /// Apply one event through the transition table.
    pub fn dispatch(&mut self, event: DialEvent) {
        self.state = reduce(&self.state, event, &self.config);
    }
}

impl Default for DialSession {
    fn default() -> Self {
        let config = DialConfig::default();
        Self {
            state: DialState::initial(config.default_value),
            config,
            center: (0.0, 0.0),
        }
    }
}

impl DialController for DialSession {
    fn get_dial_state(&self) -> DialState {
        self.state
    }

    fn config(&self) -> &DialConfig {
        &self.config
    }

    fn on_gesture(&mut self, pointer_x: f32, pointer_y: f32) {
        let (center_x, center_y) = self.center;
        match mapper::value_for_pointer(
            center_x,
            center_y,
            pointer_x,
            pointer_y,
            &self.config.range,
        ) {
            Some(value) => {
                trace!("gesture at ({}, {}) -> {}", pointer_x, pointer_y, value);
                self.dispatch(DialEvent::Gesture(value));
            }
            None => trace!("gesture at dial center ignored"),
        }
    }

    fn on_power_toggle(&mut self) {
        self.dispatch(DialEvent::PowerToggle);
    }

    fn on_preset_select(&mut self, id: &str) {
        match self.config.catalog.get(id) {
            Ok(preset) => self.dispatch(DialEvent::SelectPreset(*preset)),
            Err(e) => warn!("ignoring preset selection: {}", e),
        }
    }

    fn on_add_minute(&mut self) {
        self.dispatch(DialEvent::AddTime);
    }

    fn on_timer_pause_toggle(&mut self) {
        self.dispatch(DialEvent::TimerPauseToggle);
    }

    fn on_step_value(&mut self, delta: i32) {
        self.dispatch(DialEvent::Step(delta));
    }

    fn on_timer_tick(&mut self) {
        self.dispatch(DialEvent::Tick);
    }
}
