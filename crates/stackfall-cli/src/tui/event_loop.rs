use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// Emits a `Tick` every `tick_interval`, a `Render` whenever a tick or terminal event has
/// happened since the last render, and terminal events in between.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop` with ticks disabled.
    pub fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true, // Initial render is required on startup
        }
    }

    /// Sets the tick interval.
    ///
    /// Pass `None` to disable tick events. The next tick is a full interval away.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
        self.last_tick = Instant::now();
    }

    /// Returns the next event.
    ///
    /// Blocks until a tick is due, a render is pending, or a crossterm event occurs.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.last_tick + self.tick_interval?;
        Some(next_tick_at.saturating_duration_since(now))
    }
}
