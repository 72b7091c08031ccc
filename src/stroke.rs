use egui::{Color32, Pos2};

/// Default stroke width in canvas pixels.
pub const DEFAULT_BRUSH_WIDTH: f32 = 10.0;

/// Colors offered by the picker, in display order.
pub const PALETTE: [Color32; 4] = [Color32::BLACK, Color32::BLUE, Color32::GREEN, Color32::RED];

/// Current stroke color and width. Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color32,
    pub width: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: DEFAULT_BRUSH_WIDTH,
        }
    }
}

impl Brush {
    pub fn new(color: Color32, width: f32) -> Self {
        Self { color, width }
    }
}

/// The gesture being drawn, from pointer press until release.
///
/// The brush is captured when the stroke starts so a color change mid-gesture
/// does not recolor the points already laid down.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Pos2>,
    brush: Brush,
}

impl Stroke {
    pub fn new(start: Pos2, brush: Brush) -> Self {
        Self {
            points: vec![start],
            brush,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }
}
