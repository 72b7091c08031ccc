use egui::{Color32, Context, Painter, Pos2, Rect, Shape, TextureHandle, TextureOptions, pos2, vec2};

use crate::canvas::DrawingCanvas;
use crate::surface;

/// Paints the canvas each frame.
///
/// The surface lives in a texture that is only re-uploaded when the surface
/// version changes; the stroke in progress is drawn as vector shapes on top.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_version: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploaded_version(&self) -> Option<u64> {
        self.uploaded_version
    }

    /// Upload the surface if it changed since the last upload.
    fn sync_texture(&mut self, ctx: &Context, canvas: &DrawingCanvas) {
        let version = canvas.surface().version();
        if self.uploaded_version == Some(version) && self.texture.is_some() {
            return;
        }

        let image = surface::to_color_image(canvas.surface().pixmap());
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("canvas_surface", image, TextureOptions::LINEAR));
            }
        }
        log::trace!("Uploaded surface version {}", version);
        self.uploaded_version = Some(version);
    }

    /// Background, then the committed surface, then the stroke in progress.
    ///
    /// `rect` is the canvas area on screen; canvas coordinates are relative to
    /// its top-left corner.
    pub fn render(&mut self, ctx: &Context, painter: &Painter, rect: Rect, canvas: &DrawingCanvas) {
        self.sync_texture(ctx, canvas);
        let painter = painter.with_clip_rect(rect);

        painter.rect_filled(rect, 0.0, canvas.surface().background());

        if let Some(texture) = &self.texture {
            let [width, height] = canvas.size();
            let image_rect = Rect::from_min_size(rect.min, vec2(width as f32, height as f32));
            painter.image(
                texture.id(),
                image_rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        if let Some(stroke) = canvas.current_stroke() {
            let brush = stroke.brush();
            let points: Vec<Pos2> = stroke
                .points()
                .iter()
                .map(|p| rect.min + p.to_vec2())
                .collect();

            if points.len() > 1 {
                painter.add(Shape::line(
                    points.clone(),
                    egui::Stroke::new(brush.width, brush.color),
                ));
            }
            // round caps and joins
            for point in &points {
                painter.circle_filled(*point, brush.width / 2.0, brush.color);
            }
        }
    }
}
