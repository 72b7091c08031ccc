use std::sync::Arc;

use drawpad::panels::canvas_panel;
use drawpad::{FetchError, HostController, ImageSource, InputHandler, Renderer, Settings, SystemShare};
use egui::{Color32, Pos2, RawInput, Rect, ViewportId, vec2};
use image::{Rgba, RgbaImage};

struct NoSource;

impl ImageSource for NoSource {
    fn fetch_bytes(&self) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Cancelled)
    }
}

/// A 540x960 window on a 1920x1080 monitor.
fn raw_input() -> RawInput {
    let mut raw = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(540.0, 960.0))),
        ..Default::default()
    };
    raw.viewports.entry(ViewportId::ROOT).or_default().monitor_size = Some(vec2(1920.0, 1080.0));
    raw
}

fn host_after_first_frame(dir: &std::path::Path) -> HostController {
    let settings = Settings {
        app_storage: dir.join("app"),
        external_storage: dir.join("external"),
        ..Settings::default()
    };
    let mut host = HostController::with_services(settings, Arc::new(NoSource), Box::new(SystemShare));
    let mut input = InputHandler::default();
    let mut renderer = Renderer::new();

    let ctx = egui::Context::default();
    let _ = ctx.run(raw_input(), |ctx| {
        canvas_panel(ctx, &mut host, &mut input, &mut renderer, true);
    });
    host
}

#[test]
fn test_surface_matches_the_canvas_view() {
    let dir = tempfile::tempdir().unwrap();
    let host = host_after_first_frame(dir.path());
    assert_eq!(host.canvas().unwrap().size(), [540, 960]);
}

#[test]
fn test_fetched_image_is_centered_in_the_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = host_after_first_frame(dir.path());

    let red = [255, 0, 0, 255];
    host.complete_fetch(Ok(RgbaImage::from_pixel(400, 300, Rgba(red))));

    // 400x300 scaled by 1.35 is 540x405, placed at top (960 - 405) / 2 = 277.
    let canvas = host.canvas().unwrap();
    let surface = canvas.surface();
    assert_eq!(surface.pixel(100, 480), Some(Color32::RED));
    assert_eq!(surface.pixel(0, 277), Some(Color32::RED));
    assert_eq!(surface.pixel(539, 681), Some(Color32::RED));
    assert_eq!(surface.pixel(270, 276), Some(surface.background()));
    assert_eq!(surface.pixel(270, 682), Some(surface.background()));

    let exported = image::load_from_memory(&canvas.export_snapshot(80).unwrap()).unwrap();
    assert_eq!((exported.width(), exported.height()), (540, 960));
}
