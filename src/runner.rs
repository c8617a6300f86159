//! A dial session wired to its own tick source.

use log::{error, info};

use crate::config::DialConfig;
use crate::controller::{DialController, DialSession};
use crate::state::DialState;
use crate::ticker::Ticker;

/// Owns a [`DialSession`] and the [`Ticker`] that drives its countdown.
///
/// The ticker exists only while the timer is running. It is started when a
/// transition sets the timer running and stopped when one pauses or ends
/// the timer, or when the runner is dropped.
///
/// Ticks are delivered in order on the caller's thread, by [`pump`](Self::pump)
/// and ahead of every input.
#[derive(Debug)]
pub struct SessionRunner {
    session: DialSession,
    ticker: Option<Ticker>,
}

impl SessionRunner {
    /// Wrap a session. No ticker runs until the timer starts.
    pub fn new(session: DialSession) -> Self {
        let mut runner = Self {
            session,
            ticker: None,
        };
        runner.sync_ticker();
        runner
    }

    /// Whether a tick source is currently scheduled.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Apply every tick that arrived since the last call.
    ///
    /// Returns how many ticks changed the timer.
    pub fn pump(&mut self) -> usize {
        let applied = self.apply_pending_ticks();
        self.sync_ticker();
        applied
    }

    /// Apply queued ticks without touching the ticker itself.
    ///
    /// Every input runs this first so that ticks which arrived before it are
    /// applied before it, never dropped or reordered after it.
    fn apply_pending_ticks(&mut self) -> usize {
        let pending = self.ticker.as_ref().map_or(0, Ticker::pending);
        let mut applied = 0;
        for _ in 0..pending {
            if !self.session.get_dial_state().timer.running {
                break;
            }
            self.session.on_timer_tick();
            applied += 1;
        }
        applied
    }

    fn sync_ticker(&mut self) {
        let running = self.session.get_dial_state().timer.running;
        match (running, self.ticker.is_some()) {
            (true, false) => match Ticker::start(self.session.config().tick_period) {
                Ok(ticker) => self.ticker = Some(ticker),
                Err(e) => error!("failed to start timer ticks: {}", e),
            },
            (false, true) => {
                if let Some(ticker) = self.ticker.take() {
                    ticker.stop();
                }
            }
            _ => {}
        }
    }
}

impl Drop for SessionRunner {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            info!("session closed with timer running");
            ticker.stop();
        }
    }
}

impl DialController for SessionRunner {
    fn get_dial_state(&self) -> DialState {
        self.session.get_dial_state()
    }

    fn config(&self) -> &DialConfig {
        self.session.config()
    }

    fn on_gesture(&mut self, pointer_x: f32, pointer_y: f32) {
        self.apply_pending_ticks();
        self.session.on_gesture(pointer_x, pointer_y);
        self.sync_ticker();
    }

    fn on_power_toggle(&mut self) {
        self.apply_pending_ticks();
        self.session.on_power_toggle();
        self.sync_ticker();
    }

    fn on_preset_select(&mut self, id: &str) {
        self.apply_pending_ticks();
        self.session.on_preset_select(id);
        self.sync_ticker();
    }

    fn on_add_minute(&mut self) {
        self.apply_pending_ticks();
        self.session.on_add_minute();
        self.sync_ticker();
    }

    fn on_timer_pause_toggle(&mut self) {
        self.apply_pending_ticks();
        self.session.on_timer_pause_toggle();
        self.sync_ticker();
    }

    fn on_step_value(&mut self, delta: i32) {
        self.apply_pending_ticks();
        self.session.on_step_value(delta);
        self.sync_ticker();
    }

    fn on_timer_tick(&mut self) {
        self.apply_pending_ticks();
        self.session.on_timer_tick();
        self.sync_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    fn runner(period: Duration) -> SessionRunner {
        let config = DialConfig::default().with_tick_period(period);
        SessionRunner::new(DialSession::new(config).unwrap())
    }

    #[test]
    fn test_ticker_follows_timer() {
        let mut runner = runner(Duration::from_secs(3600));
        assert!(!runner.is_ticking());

        runner.on_add_minute();
        assert!(runner.is_ticking());

        runner.on_timer_pause_toggle();
        assert!(!runner.is_ticking());

        runner.on_timer_pause_toggle();
        assert!(runner.is_ticking());

        runner.on_power_toggle();
        assert!(!runner.is_ticking());
        assert_eq!(runner.get_dial_state().timer.total_secs, 0);
    }

    #[test]
    fn test_manual_ticks_stop_ticker_at_end() {
        let mut runner = runner(Duration::from_secs(3600));
        runner.on_add_minute();
        for _ in 0..60 {
            runner.on_timer_tick();
        }
        assert!(!runner.is_ticking());
        assert!(!runner.get_dial_state().power_on);
    }

    #[test]
    fn test_pump_runs_timer_to_completion() {
        let mut runner = runner(Duration::from_millis(1));
        runner.on_preset_select("cold-60");
        runner.on_add_minute();

        let deadline = Instant::now() + Duration::from_secs(10);
        let mut applied = 0;
        while runner.is_ticking() && Instant::now() < deadline {
            applied += runner.pump();
            thread::sleep(Duration::from_millis(2));
        }

        assert_eq!(applied, 60);
        assert!(!runner.is_ticking());
        let state = runner.get_dial_state();
        assert!(!state.power_on);
        assert_eq!(state.selected_preset, None);
        assert_eq!(state.timer.remaining_secs, 0);
        assert_eq!(state.timer.total_secs, 60);
        assert!(!state.timer.running);
    }

    #[test]
    fn test_pause_keeps_ticks_that_already_elapsed() {
        let mut runner = runner(Duration::from_millis(5));
        runner.on_add_minute();
        thread::sleep(Duration::from_millis(100));

        runner.on_timer_pause_toggle();
        let timer = runner.get_dial_state().timer;
        assert!(!timer.running);
        assert!(!runner.is_ticking());
        assert!(timer.remaining_secs < 60);
        assert_eq!(timer.total_secs, 60);
    }

    #[test]
    fn test_queued_ticks_apply_before_add_time() {
        let mut runner = runner(Duration::from_millis(20));
        runner.on_add_minute();
        thread::sleep(Duration::from_millis(200));

        runner.on_add_minute();
        let timer = runner.get_dial_state().timer;
        assert_eq!(timer.total_secs, 120);
        assert!(timer.remaining_secs < 120);
        assert!(timer.remaining_secs > 60);
        assert!(timer.running);
    }

    #[test]
    fn test_drop_with_running_timer() {
        let mut runner = runner(Duration::from_millis(1));
        runner.on_add_minute();
        drop(runner);
    }
}
