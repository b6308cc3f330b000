use std::fmt;

use crate::stroke::BlendMode;

/// Drawing tools available on the canvas.
///
/// The selected tool only affects strokes opened after the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Paintbrush,
    Eraser,
}

impl Tool {
    /// Every tool, in toolbar order
    pub const ALL: [Tool; 2] = [Tool::Paintbrush, Tool::Eraser];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Paintbrush => "Paintbrush",
            Tool::Eraser => "Eraser",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Paintbrush => "🖌",
            Tool::Eraser => "⌫",
        }
    }

    /// Blend mode given to strokes opened with this tool
    pub fn blend_mode(self) -> BlendMode {
        match self {
            Tool::Paintbrush => BlendMode::Normal,
            Tool::Eraser => BlendMode::Clear,
        }
    }

    pub fn is_erasing(self) -> bool {
        self == Tool::Eraser
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
