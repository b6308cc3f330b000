use egui::Pos2;

use crate::stroke::Stroke;

/// The drawing log: every stroke of the session in z-order, oldest first.
///
/// Only the last stroke can be open, and only the open stroke accepts points.
/// Opening a new stroke, undoing or clearing closes it for good.
#[derive(Debug, Default, Clone)]
pub struct Document {
    strokes: Vec<Stroke>,
    open: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `stroke` as the new open stroke, closing the previous one.
    pub fn begin_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.open = true;
    }

    fn open_stroke_mut(&mut self) -> Option<&mut Stroke> {
        if self.open {
            self.strokes.last_mut()
        } else {
            None
        }
    }

    /// Appends a point to the open stroke. Returns false when nothing is open.
    pub fn extend_open_stroke(&mut self, point: Pos2) -> bool {
        match self.open_stroke_mut() {
            Some(stroke) => {
                stroke.push_point(point);
                true
            }
            None => false,
        }
    }

    pub fn has_open_stroke(&self) -> bool {
        self.open
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn remove_last_stroke(&mut self) -> Option<Stroke> {
        self.open = false;
        self.strokes.pop()
    }

    pub fn clear(&mut self) {
        self.open = false;
        self.strokes.clear();
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
