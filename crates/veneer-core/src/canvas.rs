//! Canvas implementations for rendering.

use crate::draw::DrawCommand;
use crate::widget::Canvas;
use crate::{Color, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Used by tests to verify what was painted and by hosts that replay the
/// commands onto a real backend.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    opacity_stack: Vec<f32>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current opacity (product of the pushed layers).
    #[must_use]
    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.iter().product()
    }

    fn record(&mut self, command: DrawCommand) {
        let alpha = self.current_opacity();
        if alpha < 1.0 {
            self.commands.push(command.with_opacity(alpha));
        } else {
            self.commands.push(command);
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(DrawCommand::filled_rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.record(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn push_opacity(&mut self, alpha: f32) {
        self.opacity_stack.push(alpha.clamp(0.0, 1.0));
    }

    fn pop_opacity(&mut self) {
        self.opacity_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.current_opacity(), 1.0);
    }

    #[test]
    fn test_fill_rect_records_plain_command() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(
            canvas.commands()[0],
            DrawCommand::filled_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE)
        );
    }

    #[test]
    fn test_opacity_layers_wrap_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_opacity(0.5);
        canvas.push_opacity(0.5);
        canvas.fill_rounded_rect(Rect::new(0.0, 0.0, 10.0, 7.0), 10.0, Color::BLACK);
        canvas.pop_opacity();
        canvas.pop_opacity();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        assert_eq!(canvas.command_count(), 2);
        assert_eq!(canvas.commands()[0].effective_alpha(), 0.25);
        assert_eq!(canvas.commands()[1].effective_alpha(), 1.0);
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::default(), Color::BLACK);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }
}
