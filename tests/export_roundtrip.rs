use drawpad::export::{self, SAVE_DIR_NAME, SHARE_FILE_NAME};
use drawpad::surface::to_rgba_image;
use drawpad::{Brush, DrawingCanvas, Settings, WindowOrientation};
use egui::{Color32, pos2};

fn drawn_canvas() -> DrawingCanvas {
    let mut canvas = DrawingCanvas::new(120, 90, Color32::WHITE, Brush::new(Color32::BLACK, 16.0)).unwrap();
    let mut orientation = WindowOrientation::new();
    canvas.on_touch_down(pos2(10.0, 45.0), &mut orientation);
    canvas.on_touch_move(pos2(60.0, 45.0));
    canvas.on_touch_up(pos2(110.0, 45.0));
    canvas
}

fn mean_abs_error(a: &image::RgbaImage, b: &image::RgbaImage) -> f64 {
    let total: u64 = a
        .pixels()
        .zip(b.pixels())
        .flat_map(|(pa, pb)| (0..3).map(move |c| pa.0[c].abs_diff(pb.0[c]) as u64))
        .sum();
    total as f64 / (a.width() as f64 * a.height() as f64 * 3.0)
}

#[test]
fn test_snapshot_decodes_to_composite() {
    let canvas = drawn_canvas();
    let expected = to_rgba_image(&canvas.composite());

    let bytes = canvas.export_snapshot(80).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

    assert_eq!(decoded.dimensions(), expected.dimensions());
    assert!(mean_abs_error(&decoded, &expected) < 8.0);

    // away from edges the lossy copy stays close
    let ink = decoded.get_pixel(60, 45).0;
    assert!(ink[..3].iter().all(|c| *c < 40), "{:?}", ink);
    let paper = decoded.get_pixel(60, 10).0;
    assert!(paper[..3].iter().all(|c| *c > 215), "{:?}", paper);
}

#[test]
fn test_snapshot_includes_stroke_in_progress() {
    let mut canvas = DrawingCanvas::new(60, 60, Color32::WHITE, Brush::new(Color32::BLACK, 12.0)).unwrap();
    let mut orientation = WindowOrientation::new();
    canvas.on_touch_down(pos2(5.0, 30.0), &mut orientation);
    canvas.on_touch_move(pos2(55.0, 30.0));

    let bytes = canvas.export_snapshot(90).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert!(decoded.get_pixel(30, 30).0[..3].iter().all(|c| *c < 40));
}

#[test]
fn test_save_picture_writes_timestamped_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        app_storage: dir.path().join("app"),
        ..Settings::default()
    };

    let path = export::save_picture(&drawn_canvas(), &settings).unwrap();

    assert_eq!(path.parent().unwrap(), dir.path().join("app").join(SAVE_DIR_NAME));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("demo_app") && name.ends_with(".jpg"), "{}", name);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
}

#[test]
fn test_share_export_is_jpeg_despite_png_name() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        external_storage: dir.path().to_path_buf(),
        ..Settings::default()
    };

    let path = export::export_for_share(&drawn_canvas(), &settings).unwrap();

    assert_eq!(path, dir.path().join(SHARE_FILE_NAME));
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
}

#[test]
fn test_save_into_unwritable_location_fails() {
    let dir = tempfile::tempdir().unwrap();
    // a file where the storage directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();
    let settings = Settings {
        app_storage: blocker,
        ..Settings::default()
    };

    assert!(export::save_picture(&drawn_canvas(), &settings).is_err());
}
