use super::{CanvasEvent, EventHandler};

/// Asks egui for a new frame whenever the drawing changes
#[derive(Debug)]
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, event: &CanvasEvent) {
        if event.changes_drawing() {
            self.ctx.request_repaint();
        }
    }
}
