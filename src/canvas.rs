//! The drawing canvas: touch handling, committing strokes, and compositing.

use egui::{Color32, Pos2};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::error::{CanvasError, ExportError};
use crate::export;
use crate::input::TouchEvent;
use crate::orientation::OrientationController;
use crate::stroke::{Brush, Stroke};
use crate::surface::{self, Surface};

/// Where a composited image ended up on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePlacement {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// Scale `image` to fit inside `canvas` keeping its aspect ratio, and center it.
///
/// Returns `None` when either size has a zero dimension.
pub fn fit_centered(canvas: [u32; 2], image: [u32; 2]) -> Option<ImagePlacement> {
    let [canvas_w, canvas_h] = canvas;
    let [image_w, image_h] = image;
    if canvas_w == 0 || canvas_h == 0 || image_w == 0 || image_h == 0 {
        return None;
    }

    let ratio = (canvas_w as f32 / image_w as f32).min(canvas_h as f32 / image_h as f32);
    let width = ((ratio * image_w as f32).round() as u32).clamp(1, canvas_w);
    let height = ((ratio * image_h as f32).round() as u32).clamp(1, canvas_h);

    Some(ImagePlacement {
        left: ((canvas_w - width) / 2) as i32,
        top: ((canvas_h - height) / 2) as i32,
        width,
        height,
    })
}

/// Owns the bitmap surface and the stroke in progress.
///
/// A stroke is either accumulating in `current_stroke` or already rasterized
/// onto `surface`, never both.
#[derive(Debug)]
pub struct DrawingCanvas {
    surface: Surface,
    brush: Brush,
    current_stroke: Option<Stroke>,
}

impl DrawingCanvas {
    pub fn new(width: u32, height: u32, background: Color32, brush: Brush) -> Result<Self, CanvasError> {
        log::info!("Creating {}x{} drawing surface", width, height);
        Ok(Self {
            surface: Surface::new(width, height, background)?,
            brush,
            current_stroke: None,
        })
    }

    pub fn size(&self) -> [u32; 2] {
        [self.surface.width(), self.surface.height()]
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current_stroke.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.current_stroke.is_some()
    }

    /// Dispatch a translated pointer event to the matching touch handler.
    pub fn handle_touch(&mut self, event: TouchEvent, orientation: &mut dyn OrientationController) {
        match event {
            TouchEvent::Down(pos) => self.on_touch_down(pos, orientation),
            TouchEvent::Move(pos) => self.on_touch_move(pos),
            TouchEvent::Up(pos) => self.on_touch_up(pos),
        }
    }

    /// Start a new stroke. The first touch also pins the orientation.
    pub fn on_touch_down(&mut self, pos: Pos2, orientation: &mut dyn OrientationController) {
        if self.current_stroke.is_some() {
            log::debug!("Touch down during a stroke; restarting at {:?}", pos);
        }
        self.current_stroke = Some(Stroke::new(pos, self.brush));
        if !orientation.is_locked() {
            orientation.lock();
        }
    }

    pub fn on_touch_move(&mut self, pos: Pos2) {
        if let Some(stroke) = &mut self.current_stroke {
            stroke.add_point(pos);
        }
    }

    /// Finish the stroke at `pos` and commit it onto the surface.
    pub fn on_touch_up(&mut self, pos: Pos2) {
        let Some(mut stroke) = self.current_stroke.take() else {
            return;
        };
        stroke.add_point(pos);
        log::debug!("Committing stroke with {} points", stroke.points().len());
        self.surface.stroke_polyline(stroke.points(), &stroke.brush());
    }

    /// Background, then the surface, then the stroke in progress.
    pub fn composite(&self) -> Pixmap {
        let mut pixmap = self.surface.pixmap().clone();
        pixmap.fill(surface::skia_color(self.surface.background()));
        pixmap.draw_pixmap(
            0,
            0,
            self.surface.pixmap().as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        if let Some(stroke) = &self.current_stroke {
            surface::paint_polyline(&mut pixmap, stroke.points(), &stroke.brush());
        }
        pixmap
    }

    /// Wipe the drawing and release the orientation.
    pub fn clear(&mut self, orientation: &mut dyn OrientationController) {
        log::info!("Clearing canvas");
        self.surface.clear();
        orientation.unlock();
    }

    /// Affects strokes started after this call only.
    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush.color = color;
    }

    /// Encode the current composite as JPEG.
    pub fn export_snapshot(&self, quality: u8) -> Result<Vec<u8>, ExportError> {
        export::encode_jpeg(&self.composite(), quality)
    }

    /// Scale `image` to fit the canvas, center it, and draw it onto the surface.
    pub fn composite_image(&mut self, image: &RgbaImage) -> Result<ImagePlacement, CanvasError> {
        let (width, height) = image.dimensions();
        let placement =
            fit_centered(self.size(), [width, height]).ok_or(CanvasError::EmptyImage { width, height })?;

        log::info!(
            "Compositing {}x{} image as {}x{} at ({}, {})",
            width,
            height,
            placement.width,
            placement.height,
            placement.left,
            placement.top
        );

        let scaled = imageops::resize(image, placement.width, placement.height, FilterType::Nearest);
        self.surface.draw_image(&scaled, placement.left, placement.top)?;
        Ok(placement)
    }
}
