//! The raster buffer that holds every committed stroke and composited image.

use egui::{Color32, ColorImage, Pos2};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    ColorU8, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Transform,
};

use crate::error::CanvasError;
use crate::stroke::Brush;

/// Fixed-size RGBA surface. Starts transparent; `clear` fills it with the
/// background color.
///
/// `version` increases on every mutation so the renderer knows when to
/// re-upload its texture.
pub struct Surface {
    pixmap: Pixmap,
    background: Color32,
    version: u64,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("background", &self.background)
            .field("version", &self.version)
            .finish()
    }
}

impl Surface {
    pub fn new(width: u32, height: u32, background: Color32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::SurfaceSize { width, height })?;
        Ok(Self {
            pixmap,
            background,
            version: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha color of a single pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        pixel_at(&self.pixmap, x, y)
    }

    /// Fill every pixel with the background color.
    pub fn clear(&mut self) {
        self.pixmap.fill(skia_color(self.background));
        self.version += 1;
    }

    /// Rasterize a polyline with the given brush.
    pub fn stroke_polyline(&mut self, points: &[Pos2], brush: &Brush) {
        paint_polyline(&mut self.pixmap, points, brush);
        self.version += 1;
    }

    /// Draw `image` unscaled with its top-left corner at (`left`, `top`).
    pub fn draw_image(&mut self, image: &RgbaImage, left: i32, top: i32) -> Result<(), CanvasError> {
        let source = pixmap_from_rgba(image)?;
        self.pixmap.draw_pixmap(
            left,
            top,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        self.version += 1;
        Ok(())
    }
}

/// Stroke `points` onto `pixmap` with round caps and joins.
///
/// A polyline whose points all coincide has no length to stroke, so it is
/// filled as a dot of the brush's diameter instead.
pub(crate) fn paint_polyline(pixmap: &mut Pixmap, points: &[Pos2], brush: &Brush) {
    let Some(first) = points.first() else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(skia_color(brush.color));
    paint.anti_alias = true;

    if points.iter().all(|p| p == first) {
        if let Some(dot) = PathBuilder::from_circle(first.x, first.y, brush.width / 2.0) {
            pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
        }
        return;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(first.x, first.y);
    for point in &points[1..] {
        builder.line_to(point.x, point.y);
    }
    let Some(path) = builder.finish() else {
        log::warn!("Skipping degenerate stroke with {} points", points.len());
        return;
    };

    let stroke = tiny_skia::Stroke {
        width: brush.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

pub(crate) fn skia_color(color: Color32) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

pub(crate) fn pixel_at(pixmap: &Pixmap, x: u32, y: u32) -> Option<Color32> {
    let color = pixmap.pixel(x, y)?.demultiply();
    Some(Color32::from_rgba_unmultiplied(
        color.red(),
        color.green(),
        color.blue(),
        color.alpha(),
    ))
}

fn pixmap_from_rgba(image: &RgbaImage) -> Result<Pixmap, CanvasError> {
    let (width, height) = image.dimensions();
    let mut pixmap = Pixmap::new(width, height).ok_or(CanvasError::EmptyImage { width, height })?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}

/// Copy a pixmap out as straight-alpha RGBA.
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let color = pixel_at(pixmap, x, y).unwrap_or(Color32::TRANSPARENT);
        Rgba(color.to_srgba_unmultiplied())
    })
}

/// Wrap a pixmap as an egui image for texture upload.
pub fn to_color_image(pixmap: &Pixmap) -> ColorImage {
    ColorImage::from_rgba_premultiplied(
        [pixmap.width() as usize, pixmap.height() as usize],
        pixmap.data(),
    )
}
