use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Application driven by [`Runtime::run`].
pub trait App {
    /// Called once before the first event. Use this to arm the tick interval.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the scheduler loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);

    /// Advances the game by one tick.
    fn update(&mut self, runtime: &mut Runtime);
}
