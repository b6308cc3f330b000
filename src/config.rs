use std::fs;
use std::path::Path;

use egui::Color32;
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::palette::{DEFAULT_COLORS, Palette};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "DRAW_PAD_CONFIG";

/// Application settings. Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DrawPadConfig {
    /// Palette swatches as RGBA
    pub palette: Vec<[u8; 4]>,
    /// Color shown beneath the drawing (and through erased areas)
    pub background: [u8; 4],
    pub window_size: [f32; 2],
}

impl Default for DrawPadConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_COLORS.iter().map(|c| c.to_srgba_unmultiplied()).collect(),
            background: [255, 255, 255, 255],
            window_size: [800.0, 600.0],
        }
    }
}

impl DrawPadConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn load_or_default() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {path}: {err}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.palette.is_empty() {
            return Err(ConfigError::InvalidConfig("palette has no colors".to_string()));
        }
        let [width, height] = self.window_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "window size must be positive, got {width}x{height}"
            )));
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette::new(
            self.palette
                .iter()
                .map(|[r, g, b, a]| Color32::from_rgba_unmultiplied(*r, *g, *b, *a))
                .collect(),
        )
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}
