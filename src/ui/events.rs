use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::resource::{FetchError, FetchResult};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
    /// Request `generation` reached a terminal outcome.
    FetchSettled {
        generation: u64,
        outcome: Result<Option<FetchResult>, FetchError>,
    },
    /// The input thread stopped after a terminal error. No further keys
    /// will arrive.
    InputClosed(String),
}

/// Where terminal events come from. Crossterm in production.
pub trait EventSource: Send + 'static {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(CrosstermEvents, tick_rate)
    }

    pub fn with_source<S: EventSource>(mut source: S, tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        thread::spawn(move || pump_events(&mut source, &event_tx, tick_rate, &thread_stop));

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Forwards input and ticks until stopped, the receiver is gone, or the
/// terminal fails. A terminal failure is reported as `InputClosed`.
fn pump_events<S: EventSource>(
    source: &mut S,
    tx: &Sender<AppEvent>,
    tick_rate: Duration,
    stop: &AtomicBool,
) {
    let mut last_tick = Instant::now();
    while !stop.load(Ordering::Relaxed) {
        // Short poll so the stop flag is noticed promptly
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let event = match source.poll(timeout) {
            Ok(true) => match source.read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                Ok(_) => None,
                Err(err) => {
                    tracing::error!(error = %err, "terminal event read failed");
                    let _ = tx.send(AppEvent::InputClosed(format!("read failed: {err}")));
                    return;
                }
            },
            Ok(false) => None,
            Err(err) => {
                tracing::error!(error = %err, "terminal event poll failed");
                let _ = tx.send(AppEvent::InputClosed(format!("poll failed: {err}")));
                return;
            }
        };

        if let Some(event) = event {
            if tx.send(event).is_err() {
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
