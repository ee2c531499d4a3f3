//! Module trait for the panels the shell dispatches to

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::Action;

/// Trait for panels that own their state and render themselves
pub trait Module {
    /// Panel title shown on its border
    fn title(&self) -> &'static str;

    /// Handle keyboard input the shell did not consume
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent) -> Action;

    /// Render into the main area
    fn render(&self, frame: &mut Frame, area: Rect);
}
