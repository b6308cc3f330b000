use egui::Color32;

/// Default swatches, in display order
pub const DEFAULT_COLORS: [Color32; 11] = [
    Color32::BLACK,
    Color32::from_rgb(85, 85, 85),   // dark gray
    Color32::WHITE,
    Color32::from_rgb(153, 102, 51), // brown
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(255, 128, 0),  // orange
    Color32::from_rgb(255, 255, 0),
    Color32::from_rgb(255, 0, 255),  // magenta
    Color32::from_rgb(128, 0, 128),  // purple
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
];

/// The list of selectable stroke colors and the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color32>,
    selected: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.to_vec())
    }
}

impl Palette {
    /// Creates a palette with the first color selected
    pub fn new(colors: Vec<Color32>) -> Self {
        let selected = colors.first().copied().unwrap_or(Color32::BLACK);
        Self { colors, selected }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    pub fn color_at(&self, index: usize) -> Option<Color32> {
        self.colors.get(index).copied()
    }

    /// Index of the selected color, if it is one of the swatches
    pub fn selected_index(&self) -> Option<usize> {
        self.colors.iter().position(|color| *color == self.selected)
    }

    /// Selects the color at `index`. Out of range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<Color32> {
        let color = self.color_at(index)?;
        self.selected = color;
        Some(color)
    }

    pub fn selected(&self) -> Color32 {
        self.selected
    }
}
