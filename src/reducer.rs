//! Transition table for the dial session.
//!
//! [`reduce`] is a pure function from the previous snapshot and one event to
//! the next snapshot. It is total: every event is valid in every state, and
//! events that do not apply in the current state leave it unchanged.

use log::{debug, info, trace};

use crate::config::DialConfig;
use crate::preset::Preset;
use crate::state::{DialState, TimerState};

/// One input to the dial session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialEvent {
    /// A drag gesture resolved to this value.
    Gesture(i32),
    /// The power button.
    PowerToggle,
    /// A preset tile.
    SelectPreset(Preset),
    /// The add-time button.
    AddTime,
    /// One period of the tick source.
    Tick,
    /// The pause/resume button.
    TimerPauseToggle,
    /// The ± buttons; the delta is counted in steps.
    Step(i32),
}

/// Apply `event` to `state`.
pub fn reduce(state: &DialState, event: DialEvent, config: &DialConfig) -> DialState {
    let next = match event {
        DialEvent::Gesture(value) => set_value(state, value, config),
        DialEvent::PowerToggle => toggle_power(state, config),
        DialEvent::SelectPreset(preset) => select_preset(state, preset, config),
        DialEvent::AddTime => add_time(state, config),
        DialEvent::Tick => tick(state),
        DialEvent::TimerPauseToggle => toggle_pause(state),
        DialEvent::Step(delta) => {
            let value = state.value.saturating_add(delta.saturating_mul(config.step));
            set_value(state, value, config)
        }
    };
    if next != *state {
        debug!("{:?}: {:?} -> {:?}", event, state, next);
    }
    next
}

fn set_value(state: &DialState, value: i32, config: &DialConfig) -> DialState {
    if !state.power_on {
        trace!("value {} ignored while powered off", value);
        return *state;
    }

    let value = config.range.clamp(value);
    let selected_preset = state.selected_preset.filter(|id| {
        config
            .catalog
            .get(id.as_str())
            .is_ok_and(|preset| preset.value == value)
    });
    DialState {
        value,
        selected_preset,
        ..*state
    }
}

fn toggle_power(state: &DialState, config: &DialConfig) -> DialState {
    if state.power_on {
        power_off(state, config)
    } else {
        info!("power on");
        DialState {
            power_on: true,
            value: config.default_value,
            ..*state
        }
    }
}

fn power_off(state: &DialState, config: &DialConfig) -> DialState {
    info!("power off");
    if state.timer.running {
        debug!("timer cancelled with {}s left", state.timer.remaining_secs);
    }
    DialState {
        power_on: false,
        value: config.default_value,
        selected_preset: None,
        timer: TimerState::default(),
    }
}

fn select_preset(state: &DialState, preset: Preset, config: &DialConfig) -> DialState {
    // re-tapping the active preset turns the whole unit off
    if state.is_selected(preset.id) {
        info!("preset {} tapped again", preset.id);
        return power_off(state, config);
    }

    info!("preset {} selected at {}", preset.id, preset.value);
    DialState {
        power_on: true,
        value: config.range.clamp(preset.value),
        selected_preset: Some(preset.id),
        ..*state
    }
}

fn add_time(state: &DialState, config: &DialConfig) -> DialState {
    let increment = config.timer_increment_secs;
    DialState {
        power_on: true,
        timer: TimerState {
            remaining_secs: state.timer.remaining_secs.saturating_add(increment),
            total_secs: state.timer.total_secs.saturating_add(increment),
            running: true,
        },
        ..*state
    }
}

fn tick(state: &DialState) -> DialState {
    if !state.timer.running || state.timer.remaining_secs == 0 {
        return *state;
    }

    let remaining_secs = state.timer.remaining_secs - 1;
    trace!("tick, {}s left", remaining_secs);
    if remaining_secs > 0 {
        return DialState {
            timer: TimerState {
                remaining_secs,
                ..state.timer
            },
            ..*state
        };
    }

    info!("timer finished, power off");
    DialState {
        power_on: false,
        selected_preset: None,
        timer: TimerState {
            remaining_secs: 0,
            running: false,
            ..state.timer
        },
        ..*state
    }
}

fn toggle_pause(state: &DialState) -> DialState {
    if state.timer.total_secs == 0 || state.timer.is_terminal() {
        return *state;
    }
    DialState {
        timer: TimerState {
            running: !state.timer.running,
            ..state.timer
        },
        ..*state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetId;

    fn config() -> DialConfig {
        DialConfig::default()
    }

    fn preset(id: &str) -> Preset {
        *config().catalog.get(id).unwrap()
    }

    fn powered(value: i32) -> DialState {
        DialState {
            power_on: true,
            value,
            ..DialState::initial(65)
        }
    }

    #[test]
    fn test_gesture_ignored_when_off() {
        let state = DialState::initial(65);
        assert_eq!(reduce(&state, DialEvent::Gesture(100), &config()), state);
    }

    #[test]
    fn test_gesture_clamps_value() {
        let next = reduce(&powered(70), DialEvent::Gesture(500), &config());
        assert_eq!(next.value, 120);
    }

    #[test]
    fn test_gesture_keeps_matching_preset() {
        let state = reduce(
            &DialState::initial(65),
            DialEvent::SelectPreset(preset("hot-105")),
            &config(),
        );
        let same = reduce(&state, DialEvent::Gesture(105), &config());
        assert_eq!(same.selected_preset, Some(PresetId::new("hot-105")));
        let moved = reduce(&state, DialEvent::Gesture(104), &config());
        assert_eq!(moved.selected_preset, None);
    }

    #[test]
    fn test_power_on_resets_value_and_keeps_timer() {
        let state = DialState {
            value: 90,
            timer: TimerState {
                remaining_secs: 10,
                total_secs: 60,
                running: false,
            },
            ..DialState::initial(65)
        };
        let next = reduce(&state, DialEvent::PowerToggle, &config());
        assert!(next.power_on);
        assert_eq!(next.value, 65);
        assert_eq!(next.timer, state.timer);
    }

    #[test]
    fn test_power_off_resets_everything() {
        let starts = [
            powered(110),
            DialState {
                selected_preset: Some(PresetId::new("cold-60")),
                ..powered(60)
            },
            DialState {
                timer: TimerState {
                    remaining_secs: 42,
                    total_secs: 120,
                    running: true,
                },
                ..powered(80)
            },
        ];
        for start in starts {
            let next = reduce(&start, DialEvent::PowerToggle, &config());
            assert_eq!(next, DialState::initial(65));
        }
    }

    #[test]
    fn test_reselect_preset_powers_off() {
        let cfg = config();
        let cold = preset("cold-60");
        let once = reduce(&DialState::initial(65), DialEvent::SelectPreset(cold), &cfg);
        assert!(once.power_on);
        let twice = reduce(&once, DialEvent::SelectPreset(cold), &cfg);
        assert_eq!(twice, DialState::initial(65));
    }

    #[test]
    fn test_switch_between_presets() {
        let cfg = config();
        let cold = reduce(
            &DialState::initial(65),
            DialEvent::SelectPreset(preset("cold-60")),
            &cfg,
        );
        let grooming = reduce(&cold, DialEvent::SelectPreset(preset("grooming-90")), &cfg);
        assert!(grooming.power_on);
        assert_eq!(grooming.value, 90);
        assert_eq!(grooming.selected_preset, Some(PresetId::new("grooming-90")));
    }

    #[test]
    fn test_add_time_accumulates() {
        let cfg = config();
        let once = reduce(&DialState::initial(65), DialEvent::AddTime, &cfg);
        let twice = reduce(&once, DialEvent::AddTime, &cfg);
        assert!(twice.power_on);
        assert_eq!(
            twice.timer,
            TimerState {
                remaining_secs: 120,
                total_secs: 120,
                running: true
            }
        );
    }

    #[test]
    fn test_last_tick_ends_timer_and_power() {
        let state = DialState {
            selected_preset: Some(PresetId::new("hot-105")),
            timer: TimerState {
                remaining_secs: 1,
                total_secs: 60,
                running: true,
            },
            ..powered(105)
        };
        let next = reduce(&state, DialEvent::Tick, &config());
        assert!(!next.power_on);
        assert_eq!(next.selected_preset, None);
        assert_eq!(
            next.timer,
            TimerState {
                remaining_secs: 0,
                total_secs: 60,
                running: false
            }
        );
    }

    #[test]
    fn test_tick_ignored_when_paused() {
        let state = DialState {
            timer: TimerState {
                remaining_secs: 30,
                total_secs: 60,
                running: false,
            },
            ..powered(70)
        };
        assert_eq!(reduce(&state, DialEvent::Tick, &config()), state);
    }

    #[test]
    fn test_pause_toggle() {
        let cfg = config();
        let idle = DialState::initial(65);
        assert_eq!(reduce(&idle, DialEvent::TimerPauseToggle, &cfg), idle);

        let running = reduce(&idle, DialEvent::AddTime, &cfg);
        let paused = reduce(&running, DialEvent::TimerPauseToggle, &cfg);
        assert!(!paused.timer.running);
        let resumed = reduce(&paused, DialEvent::TimerPauseToggle, &cfg);
        assert!(resumed.timer.running);
    }

    #[test]
    fn test_finished_timer_cannot_resume() {
        let finished = DialState {
            timer: TimerState {
                remaining_secs: 0,
                total_secs: 60,
                running: false,
            },
            ..DialState::initial(65)
        };
        assert_eq!(
            reduce(&finished, DialEvent::TimerPauseToggle, &config()),
            finished
        );
    }

    #[test]
    fn test_step_clamps_and_clears_preset() {
        let cfg = config();
        let top = reduce(&powered(120), DialEvent::Step(1), &cfg);
        assert_eq!(top.value, 120);
        let bottom = reduce(&powered(50), DialEvent::Step(-1), &cfg);
        assert_eq!(bottom.value, 50);

        let hot = reduce(
            &DialState::initial(65),
            DialEvent::SelectPreset(preset("hot-105")),
            &cfg,
        );
        let bumped = reduce(&hot, DialEvent::Step(-1), &cfg);
        assert_eq!(bumped.value, 104);
        assert_eq!(bumped.selected_preset, None);
    }

    #[test]
    fn test_step_ignored_when_off() {
        let state = DialState::initial(65);
        assert_eq!(reduce(&state, DialEvent::Step(1), &config()), state);
    }
}
