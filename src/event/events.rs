use egui::{Color32, Pos2};

use crate::tools::Tool;

/// Notifications emitted by the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A new stroke was opened at `index` in the drawing log
    StrokeStarted { index: usize, tool: Tool, color: Color32 },
    /// A point was appended to the open stroke
    PointAppended { index: usize, point: Pos2 },
    /// The most recent stroke was removed
    StrokeUndone { remaining: usize },
    /// The drawing log was emptied
    Cleared,
    ToolChanged { old: Tool, new: Tool },
    ColorChanged { old: Color32, new: Color32 },
}

impl CanvasEvent {
    /// True for events that changed the drawing log and need a redraw.
    pub fn changes_drawing(&self) -> bool {
        matches!(
            self,
            Self::StrokeStarted { .. }
                | Self::PointAppended { .. }
                | Self::StrokeUndone { .. }
                | Self::Cleared
        )
    }
}
