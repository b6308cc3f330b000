use egui::{Color32, Pos2};

/// Line width shared by every stroke on the canvas.
pub const LINE_WIDTH: f32 = 8.0;

/// How a stroke is composited onto the strokes beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source-over with the stroke color.
    #[default]
    Normal,
    /// Removes previously drawn color under the stroke's path.
    Clear,
}

/// One continuous gesture: an ordered polyline plus its color and blend mode.
///
/// Color and blend mode are fixed at creation. Points can only be appended
/// while the stroke is the open entry of a [`crate::Document`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    blend: BlendMode,
}

impl Stroke {
    /// Create an empty stroke
    pub fn new(color: Color32, blend: BlendMode) -> Self {
        Self {
            points: Vec::new(),
            color,
            blend,
        }
    }

    pub(crate) fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    pub fn is_eraser(&self) -> bool {
        self.blend == BlendMode::Clear
    }

    /// A polyline needs at least two points to produce a visible segment.
    pub fn is_visible(&self) -> bool {
        self.points.len() >= 2
    }
}
