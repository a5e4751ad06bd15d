use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// Renders whenever something changed, ticks at a fixed interval, and waits for
/// terminal input in between.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    /// `None` until the first tick, which fires right after the first render.
    last_tick: Option<Instant>,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            last_tick: None,
            dirty: true, // Initial render is required on startup
        }
    }

    pub(super) fn request_tick(&mut self) {
        self.last_tick = None;
    }

    /// Returns the next event.
    ///
    /// Blocks until a render or tick is due or a crossterm event occurs.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(event) = self.due_event(now) {
                return Ok(event);
            }

            if !event::poll(self.timeout(now))? {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn due_event(&mut self, now: Instant) -> Option<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Some(TuiEvent::Render);
        }
        let tick_due = self
            .last_tick
            .is_none_or(|last| now.duration_since(last) >= self.tick_interval);
        if tick_due {
            self.last_tick = Some(now);
            self.dirty = true;
            return Some(TuiEvent::Tick);
        }
        None
    }

    fn timeout(&self, now: Instant) -> Duration {
        self.last_tick.map_or(Duration::ZERO, |last| {
            (last + self.tick_interval).saturating_duration_since(now)
        })
    }
}
