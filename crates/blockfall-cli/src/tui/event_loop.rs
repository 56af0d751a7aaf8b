use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event as CrosstermEvent};

/// Events produced by the scheduler.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The tick interval elapsed.
    Tick,
    /// Something changed since the last draw.
    Render,
    /// Terminal input such as a key press or a resize.
    Crossterm(CrosstermEvent),
}

/// Decides which event comes next.
///
/// Ticks are produced only while a tick interval is armed. A render follows
/// every tick and every terminal event, and nothing else is drawn in between.
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
    pub(super) fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            tick_interval: None,
            last_tick: now,
            dirty: true, // Initial render is required on startup
        }
    }

    pub(super) fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval
    }

    /// Arms (`Some`) or disarms (`None`) the tick.
    ///
    /// Arming a disarmed loop restarts the interval, so the first tick comes a
    /// full interval later.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.set_tick_interval_at(interval, Instant::now());
    }

    fn set_tick_interval_at(&mut self, interval: Option<Duration>, now: Instant) {
        if self.tick_interval.is_none() && interval.is_some() {
            self.last_tick = now;
        }
        self.tick_interval = interval;
    }

    /// Blocks until the next tick, render, or terminal event.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(event) = self.due_event(now) {
                return Ok(event);
            }

            // Without a tick to wait for, block on input.
            if let Some(timeout) = self.timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn due_event(&mut self, now: Instant) -> Option<TuiEvent> {
        if let Some(tick_interval) = self.tick_interval
            && now.duration_since(self.last_tick) >= tick_interval
        {
            self.last_tick = now;
            self.dirty = true;
            return Some(TuiEvent::Tick);
        }
        if self.dirty {
            self.dirty = false;
            return Some(TuiEvent::Render);
        }
        None
    }

    fn timeout(&self, now: Instant) -> Option<Duration> {
        let interval = self.tick_interval?;
        Some((self.last_tick + interval).saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(200);

    #[test]
    fn test_first_event_is_render() {
        let start = Instant::now();
        let mut events = EventLoop::starting_at(start);
        assert!(events.due_event(start).is_some_and(|e| e.is_render()));
        assert!(events.due_event(start).is_none());
    }

    #[test]
    fn test_no_tick_while_disarmed() {
        let start = Instant::now();
        let mut events = EventLoop::starting_at(start);
        _ = events.due_event(start);

        let later = start + Duration::from_secs(3600);
        assert!(events.due_event(later).is_none());
        assert_eq!(events.timeout(later), None);
    }

    #[test]
    fn test_tick_after_interval_then_render() {
        let start = Instant::now();
        let mut events = EventLoop::starting_at(start);
        events.set_tick_interval_at(Some(TICK), start);
        _ = events.due_event(start);

        let almost = start + TICK - Duration::from_millis(1);
        assert!(events.due_event(almost).is_none());
        assert_eq!(events.timeout(almost), Some(Duration::from_millis(1)));

        let due = start + TICK;
        assert!(events.due_event(due).is_some_and(|e| e.is_tick()));
        assert!(events.due_event(due).is_some_and(|e| e.is_render()));
        assert!(events.due_event(due).is_none());
        assert_eq!(events.timeout(due), Some(TICK));
    }

    #[test]
    fn test_disarm_stops_ticks() {
        let start = Instant::now();
        let mut events = EventLoop::starting_at(start);
        events.set_tick_interval_at(Some(TICK), start);
        _ = events.due_event(start);

        events.set_tick_interval_at(None, start);
        assert!(events.due_event(start + TICK * 10).is_none());
        assert_eq!(events.tick_interval(), None);
    }

    #[test]
    fn test_rearm_restarts_interval() {
        let start = Instant::now();
        let mut events = EventLoop::starting_at(start);
        _ = events.due_event(start);

        let resume = start + Duration::from_secs(5);
        events.set_tick_interval_at(Some(TICK), resume);
        assert!(events.due_event(resume).is_none());
        assert!(events.due_event(resume + TICK).is_some_and(|e| e.is_tick()));
    }
}
