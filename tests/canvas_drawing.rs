use drawpad::surface::Surface;
use drawpad::{Brush, DrawingCanvas, OrientationController, WindowOrientation};
use egui::{Color32, pos2};

fn new_canvas() -> DrawingCanvas {
    DrawingCanvas::new(80, 80, Color32::WHITE, Brush::default()).unwrap()
}

#[test]
fn test_diagonal_stroke_scenario() {
    let mut canvas = new_canvas();
    let mut orientation = WindowOrientation::new();

    canvas.on_touch_down(pos2(10.0, 10.0), &mut orientation);
    canvas.on_touch_move(pos2(50.0, 50.0));
    canvas.on_touch_up(pos2(50.0, 50.0));

    let surface = canvas.surface();
    // along the line
    assert_eq!(surface.pixel(30, 30), Some(Color32::BLACK));
    // round caps reach past both endpoints
    assert_eq!(surface.pixel(8, 8), Some(Color32::BLACK));
    assert_eq!(surface.pixel(51, 51), Some(Color32::BLACK));
    // well clear of the stroke
    assert_eq!(surface.pixel(58, 58), Some(Color32::TRANSPARENT));
    assert_eq!(surface.pixel(10, 50), Some(Color32::TRANSPARENT));

    assert!(orientation.is_locked());
    assert!(!canvas.is_drawing());
}

#[test]
fn test_committed_surface_matches_stroked_polyline() {
    let points = [
        pos2(5.0, 70.0),
        pos2(20.0, 15.0),
        pos2(40.0, 60.0),
        pos2(62.0, 12.0),
        pos2(75.0, 40.0),
    ];
    let brush = Brush::new(Color32::BLUE, 6.0);

    let mut canvas = DrawingCanvas::new(80, 80, Color32::WHITE, brush).unwrap();
    let mut orientation = WindowOrientation::new();
    canvas.on_touch_down(points[0], &mut orientation);
    for point in &points[1..points.len() - 1] {
        canvas.on_touch_move(*point);
    }
    canvas.on_touch_up(points[points.len() - 1]);

    let mut expected = Surface::new(80, 80, Color32::WHITE).unwrap();
    expected.stroke_polyline(&points, &brush);

    assert_eq!(canvas.surface().pixmap().data(), expected.pixmap().data());
}

#[test]
fn test_strokes_accumulate_on_surface() {
    let mut canvas = new_canvas();
    let mut orientation = WindowOrientation::new();

    canvas.on_touch_down(pos2(10.0, 20.0), &mut orientation);
    canvas.on_touch_up(pos2(70.0, 20.0));
    canvas.set_brush_color(Color32::RED);
    canvas.on_touch_down(pos2(10.0, 60.0), &mut orientation);
    canvas.on_touch_up(pos2(70.0, 60.0));

    assert_eq!(canvas.surface().pixel(40, 20), Some(Color32::BLACK));
    assert_eq!(canvas.surface().pixel(40, 60), Some(Color32::RED));
}

#[test]
fn test_clear_resets_surface_and_unlocks() {
    let mut canvas = new_canvas();
    let mut orientation = WindowOrientation::new();

    canvas.on_touch_down(pos2(10.0, 10.0), &mut orientation);
    canvas.on_touch_up(pos2(60.0, 10.0));
    assert!(orientation.is_locked());

    canvas.clear(&mut orientation);

    assert!(!orientation.is_locked());
    for y in 0..80 {
        for x in 0..80 {
            assert_eq!(canvas.surface().pixel(x, y), Some(Color32::WHITE));
        }
    }
}

#[test]
fn test_clear_when_already_unlocked() {
    let mut canvas = new_canvas();
    let mut orientation = WindowOrientation::new();

    canvas.clear(&mut orientation);
    assert!(!orientation.is_locked());
    assert_eq!(canvas.surface().pixel(0, 0), Some(Color32::WHITE));
}

#[test]
fn test_lock_is_only_taken_once() {
    struct Counting {
        locked: bool,
        locks: usize,
    }

    impl OrientationController for Counting {
        fn lock(&mut self) {
            self.locked = true;
            self.locks += 1;
        }

        fn unlock(&mut self) {
            self.locked = false;
        }

        fn is_locked(&self) -> bool {
            self.locked
        }
    }

    let mut canvas = new_canvas();
    let mut orientation = Counting { locked: false, locks: 0 };
    for _ in 0..3 {
        canvas.on_touch_down(pos2(5.0, 5.0), &mut orientation);
        canvas.on_touch_up(pos2(20.0, 20.0));
    }
    assert_eq!(orientation.locks, 1);

    canvas.clear(&mut orientation);
    canvas.on_touch_down(pos2(5.0, 5.0), &mut orientation);
    assert_eq!(orientation.locks, 2);
}
