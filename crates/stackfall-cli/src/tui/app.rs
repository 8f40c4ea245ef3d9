use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Something the [`Runtime`] can drive.
///
/// The runtime calls `update` once per gravity tick, `handle_event` for every terminal event,
/// and `draw` only after one of those two has run. Nothing is redrawn while the game is idle.
pub trait App {
    /// Called once before the first event. Sets the tick interval on `runtime`.
    fn init(&mut self, runtime: &mut Runtime);

    /// Checked before waiting for each event; `true` leaves the loop and restores the terminal.
    fn should_exit(&self) -> bool;

    /// Key presses, resizes and other terminal input.
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    fn draw(&self, frame: &mut Frame);

    /// One gravity step.
    fn update(&mut self, runtime: &mut Runtime);
}
