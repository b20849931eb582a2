use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

/// Reads terminal input on a background thread and forwards it as
/// [`AppEvent`]s, with a `Tick` every `tick_rate`.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("input-events".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        let _ = tx.send(AppEvent::Shutdown);
                        break;
                    }

                    // Short poll timeout so the shutdown flag is checked often
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                                Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                                Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                                Ok(_) => None,
                                Err(err) => {
                                    tracing::error!(%err, "Terminal read failed");
                                    break;
                                }
                            };
                            if let Some(event) = forwarded {
                                if tx.send(event).is_err() {
                                    break;
                                }
                            }
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(%err, "Terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
                tracing::debug!("Input thread stopped");
            })
            .map_err(|err| tracing::error!(%err, "Failed to spawn input thread"))
            .ok();

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
