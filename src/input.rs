use egui::{Context, Event, PointerButton, Pos2, Rect};

/// A pointer event in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down(Pos2),
    Move(Pos2),
    Up(Pos2),
}

/// Converts raw egui pointer events into `TouchEvent`s for the canvas.
///
/// Only the primary button draws. A gesture starts when the button goes down
/// inside the canvas rect and ends on release, wherever that happens. If the
/// pointer leaves the window mid-gesture the stroke ends at its last position.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    pressed: bool,
    last_pointer_pos: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pressed: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Translate this frame's raw input.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<TouchEvent> {
        ctx.input(|input| self.translate(&input.events))
    }

    pub fn translate(&mut self, events: &[Event]) -> Vec<TouchEvent> {
        let mut touches = Vec::new();

        for event in events {
            match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    if self.canvas_rect.contains(*pos) {
                        self.pressed = true;
                        touches.push(TouchEvent::Down(self.to_local(*pos)));
                    }
                    self.last_pointer_pos = Some(*pos);
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    if self.pressed {
                        self.pressed = false;
                        touches.push(TouchEvent::Up(self.to_local(*pos)));
                    }
                    self.last_pointer_pos = Some(*pos);
                }
                Event::PointerMoved(pos) => {
                    if self.pressed && self.last_pointer_pos != Some(*pos) {
                        touches.push(TouchEvent::Move(self.to_local(*pos)));
                    }
                    self.last_pointer_pos = Some(*pos);
                }
                Event::PointerGone => {
                    if self.pressed {
                        self.pressed = false;
                        if let Some(pos) = self.last_pointer_pos {
                            touches.push(TouchEvent::Up(self.to_local(pos)));
                        }
                    }
                    self.last_pointer_pos = None;
                }
                _ => {}
            }
        }

        touches
    }
}
