use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Application driven by [`Tui::run`].
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    /// Draws the screen (called whenever state changed).
    fn draw(&self, frame: &mut Frame);

    /// Refreshes application state (called on each tick).
    fn update(&mut self, tui: &mut Tui);
}
