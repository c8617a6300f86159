//! Example: run a preset with a shut-off timer.
//!
//! Run with: `RUST_LOG=info cargo run --example timer_session`

use std::thread;
use std::time::Duration;

use faucet_core::{DialConfig, DialController, DialError, DialSession, SessionRunner};

fn main() -> Result<(), DialError> {
    // Initialize logging (optional)
    env_logger::init();

    // Seconds pass a hundred times faster than real time
    let config = DialConfig::default().with_tick_period(Duration::from_millis(10));
    let mut runner = SessionRunner::new(DialSession::new(config)?);

    runner.on_preset_select("brushing-teeth-75");
    runner.on_add_minute();

    let state = runner.get_dial_state();
    println!(
        "Running {:?} at {} ({}), timer {}",
        state.selected_preset.map(|id| id.as_str()),
        state.value,
        runner.band().label(),
        state.timer.remaining_label()
    );

    while runner.is_ticking() {
        thread::sleep(Duration::from_millis(100));
        runner.pump();
        let timer = runner.get_dial_state().timer;
        println!(
            "{} left ({:.0}% elapsed)",
            timer.remaining_label(),
            timer.progress() * 100.0
        );
    }

    let state = runner.get_dial_state();
    println!("Timer done, power is {}", if state.power_on { "on" } else { "off" });

    Ok(())
}
