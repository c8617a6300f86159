//! Cancellable periodic tick source.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, trace};

/// A background thread that emits one tick per period until stopped.
///
/// Ticks queue up in a channel and are consumed on the owner's thread with
/// [`Ticker::pending`], so the session state itself never crosses threads.
/// The thread is stopped and joined exactly once, by [`Ticker::stop`] or on
/// drop, whichever comes first.
pub struct Ticker {
    ticks: Receiver<Instant>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn the tick thread.
    ///
    /// # Errors
    /// Returns the OS error if the thread cannot be spawned.
    pub fn start(period: Duration) -> std::io::Result<Self> {
        let (tick_tx, ticks) = mpsc::channel();
        let (stop, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("faucet-ticker".into())
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            if tick_tx.send(Instant::now()).is_err() {
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                trace!("ticker thread exiting");
            })?;

        debug!("ticker started every {:?}", period);
        Ok(Self {
            ticks,
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    /// Number of ticks emitted since the last call.
    pub fn pending(&self) -> usize {
        self.ticks.try_iter().count()
    }

    /// Whether the thread is still scheduled.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // dropping the sender wakes the thread immediately
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("ticker thread panicked");
            }
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_ticks() {
        let ticker = Ticker::start(Duration::from_millis(2)).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = 0;
        while seen < 3 && Instant::now() < deadline {
            seen += ticker.pending();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(seen >= 3);
        ticker.stop();
    }

    #[test]
    fn test_stop_is_prompt() {
        let ticker = Ticker::start(Duration::from_secs(3600)).unwrap();
        assert!(ticker.is_running());
        let started = Instant::now();
        ticker.stop();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_drop_stops() {
        let ticker = Ticker::start(Duration::from_secs(3600)).unwrap();
        drop(ticker);
    }
}
