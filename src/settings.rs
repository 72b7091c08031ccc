use std::path::PathBuf;

use egui::Color32;

use crate::fetch::DEFAULT_IMAGE_URL;
use crate::stroke::{Brush, DEFAULT_BRUSH_WIDTH};

/// User settings, restored from eframe storage on startup and saved on exit.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    /// Endpoint for the random image action.
    pub image_url: String,
    /// Brush color as unmultiplied sRGBA; remembered between sessions.
    pub brush_color: [u8; 4],
    pub brush_width: f32,
    pub background: [u8; 4],
    /// Surface size used when the canvas view size is unknown.
    pub canvas_size: [u32; 2],
    /// Saved drawings go to `<app_storage>/Demo_app/`.
    pub app_storage: PathBuf,
    /// Shared drawings go to `<external_storage>/android_drawing_app.png`.
    pub external_storage: PathBuf,
    pub save_quality: u8,
    pub share_quality: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_url: DEFAULT_IMAGE_URL.to_owned(),
            brush_color: Color32::BLACK.to_srgba_unmultiplied(),
            brush_width: DEFAULT_BRUSH_WIDTH,
            background: Color32::WHITE.to_srgba_unmultiplied(),
            canvas_size: [1080, 1920],
            app_storage: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("drawpad"),
            external_storage: dirs::picture_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            save_quality: 80,
            share_quality: 50,
        }
    }
}

impl Settings {
    pub fn brush(&self) -> Brush {
        let [r, g, b, a] = self.brush_color;
        Brush::new(Color32::from_rgba_unmultiplied(r, g, b, a), self.brush_width)
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush_color = color.to_srgba_unmultiplied();
    }

    /// Clamp values a hand-edited or stale store could have broken.
    pub fn validate(&mut self) {
        if !(self.brush_width.is_finite() && self.brush_width > 0.0) {
            log::warn!("Invalid brush width {}; using default", self.brush_width);
            self.brush_width = DEFAULT_BRUSH_WIDTH;
        }
        self.save_quality = self.save_quality.clamp(1, 100);
        self.share_quality = self.share_quality.clamp(1, 100);
        if self.canvas_size.contains(&0) {
            log::warn!("Invalid canvas size {:?}; using default", self.canvas_size);
            self.canvas_size = Self::default().canvas_size;
        }
    }
}
