use std::{io, time::Duration};

use crate::tui::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

/// Terminal runtime.
///
/// Owns the scheduler and runs an [`App`] inside a ratatui terminal.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the armed tick interval, if any.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        self.events.tick_interval()
    }

    /// Arms or disarms the tick. While disarmed no [`App::update`] calls happen.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()`
    /// 2. Loops until `app.should_exit()` returns true
    ///    - tick: calls `app.update()`
    ///    - render: calls `app.draw()`
    ///    - terminal event: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}
