use egui::{Color32, Pos2};
use log::{debug, info};

use crate::document::Document;
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::input::InputEvent;
use crate::stroke::Stroke;
use crate::tools::Tool;

/// Whether a gesture is currently growing the last stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasState {
    Idle,
    Drawing,
}

/// The drawing surface controller.
///
/// Owns the drawing log together with the color and tool used for the next
/// stroke. Every change to the log leaves a pending redraw request and is
/// broadcast on the canvas event bus.
#[derive(Debug)]
pub struct Canvas {
    document: Document,
    active_color: Color32,
    active_tool: Tool,
    redraw_requested: bool,
    event_bus: EventBus,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            active_color: Color32::BLACK,
            active_tool: Tool::default(),
            redraw_requested: false,
            event_bus: EventBus::new(),
        }
    }

    /// Opens a new stroke with the current color and tool.
    ///
    /// The point itself is not recorded; the first point arrives with the
    /// first move. A stroke still open from an earlier gesture is closed.
    pub fn gesture_start(&mut self, point: Pos2) {
        let stroke = Stroke::new(self.active_color, self.active_tool.blend_mode());
        self.document.begin_stroke(stroke);

        let index = self.document.len() - 1;
        debug!("stroke {index} started at {point:?} with {}", self.active_tool);
        self.notify(CanvasEvent::StrokeStarted {
            index,
            tool: self.active_tool,
            color: self.active_color,
        });
    }

    /// Appends `point` to the open stroke. Does nothing while idle.
    pub fn gesture_move(&mut self, point: Pos2) {
        if !self.document.extend_open_stroke(point) {
            debug!("ignoring move to {point:?} without an open stroke");
            return;
        }

        let index = self.document.len() - 1;
        self.notify(CanvasEvent::PointAppended { index, point });
    }

    /// Sets the color used by strokes opened from now on
    pub fn set_stroke_color(&mut self, color: Color32) {
        let old = std::mem::replace(&mut self.active_color, color);
        if old != color {
            debug!("stroke color changed from {old:?} to {color:?}");
            self.event_bus.emit(CanvasEvent::ColorChanged { old, new: color });
        }
    }

    /// Sets the tool used by strokes opened from now on
    pub fn set_tool(&mut self, tool: Tool) {
        let old = std::mem::replace(&mut self.active_tool, tool);
        if old != tool {
            info!("tool changed from {old} to {tool}");
            self.event_bus.emit(CanvasEvent::ToolChanged { old, new: tool });
        }
    }

    /// Removes the most recent stroke, if there is one
    pub fn undo(&mut self) {
        if self.document.remove_last_stroke().is_some() {
            info!("undo, {} strokes left", self.document.len());
        }
        self.notify(CanvasEvent::StrokeUndone {
            remaining: self.document.len(),
        });
    }

    /// Removes every stroke
    pub fn clear(&mut self) {
        info!("clearing {} strokes", self.document.len());
        self.document.clear();
        self.notify(CanvasEvent::Cleared);
    }

    /// True once anything has been drawn since the last clear
    pub fn has_started_drawing(&self) -> bool {
        !self.document.is_empty()
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.gesture_start(position),
            InputEvent::PointerMove { position } => self.gesture_move(position),
            // Strokes close when the next one opens.
            InputEvent::PointerUp { .. } => {}
        }
    }

    pub fn state(&self) -> CanvasState {
        if self.document.has_open_stroke() {
            CanvasState::Drawing
        } else {
            CanvasState::Idle
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.document.strokes()
    }

    pub fn active_color(&self) -> Color32 {
        self.active_color
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn is_erasing(&self) -> bool {
        self.active_tool.is_erasing()
    }

    /// Returns whether a redraw was requested since the last call, and resets it
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    fn notify(&mut self, event: CanvasEvent) {
        self.redraw_requested = true;
        self.event_bus.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_fresh_canvas_is_idle() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.state(), CanvasState::Idle);
        assert!(!canvas.has_started_drawing());
        assert!(!canvas.take_redraw_request());
        assert_eq!(canvas.active_tool(), Tool::Paintbrush);
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut canvas = Canvas::new();
        canvas.gesture_move(pos2(1.0, 1.0));
        assert!(canvas.strokes().is_empty());
        assert!(!canvas.redraw_requested);
    }

    #[test]
    fn test_redraw_request_is_consumed() {
        let mut canvas = Canvas::new();
        canvas.gesture_start(pos2(0.0, 0.0));
        assert!(canvas.take_redraw_request());
        assert!(!canvas.take_redraw_request());

        canvas.gesture_move(pos2(1.0, 1.0));
        assert!(canvas.take_redraw_request());
    }

    #[test]
    fn test_settings_do_not_request_redraw() {
        let mut canvas = Canvas::new();
        canvas.set_tool(Tool::Eraser);
        canvas.set_stroke_color(Color32::RED);
        assert!(!canvas.redraw_requested);
        assert!(canvas.is_erasing());
    }

    #[test]
    fn test_undo_leaves_canvas_idle() {
        let mut canvas = Canvas::new();
        canvas.gesture_start(pos2(0.0, 0.0));
        canvas.gesture_move(pos2(1.0, 1.0));
        canvas.gesture_start(pos2(5.0, 5.0));
        assert_eq!(canvas.state(), CanvasState::Drawing);

        canvas.undo();
        assert_eq!(canvas.state(), CanvasState::Idle);

        canvas.gesture_move(pos2(2.0, 2.0));
        assert_eq!(canvas.strokes()[0].points(), &[pos2(1.0, 1.0)]);
    }
}
