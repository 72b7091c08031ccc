//! JPEG snapshots of the canvas and the two places they are written to.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tiny_skia::Pixmap;

use crate::canvas::DrawingCanvas;
use crate::error::ExportError;
use crate::settings::Settings;
use crate::surface;
use crate::util::time;

/// Directory under app storage that receives saved drawings.
pub const SAVE_DIR_NAME: &str = "Demo_app";

/// Fixed file name used for sharing. It holds JPEG bytes despite the extension.
pub const SHARE_FILE_NAME: &str = "android_drawing_app.png";

pub fn save_file_name(timestamp_secs: u64) -> String {
    format!("demo_app{}.jpg", timestamp_secs)
}

/// `<app_storage>/Demo_app/demo_app<secs>.jpg`
pub fn save_path(app_storage: &Path, timestamp_secs: u64) -> PathBuf {
    app_storage
        .join(SAVE_DIR_NAME)
        .join(save_file_name(timestamp_secs))
}

/// `<external_storage>/android_drawing_app.png`
pub fn share_path(external_storage: &Path) -> PathBuf {
    external_storage.join(SHARE_FILE_NAME)
}

/// Encode an opaque composite as JPEG at `quality` (1..=100).
pub fn encode_jpeg(pixmap: &Pixmap, quality: u8) -> Result<Vec<u8>, ExportError> {
    let rgba = surface::to_rgba_image(pixmap);
    let rgb = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, _] = rgba.get_pixel(x, y).0;
        image::Rgb([r, g, b])
    });

    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
    encoder.encode_image(&rgb)?;
    Ok(bytes)
}

/// Write `bytes` to `path`, creating parent directories as needed.
pub fn write_snapshot(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    log::info!("Writing snapshot to: {} ({} bytes)", path.display(), bytes.len());
    fs::write(path, bytes)?;
    Ok(())
}

/// Save the composite under app storage with a timestamped name.
pub fn save_picture(canvas: &DrawingCanvas, settings: &Settings) -> Result<PathBuf, ExportError> {
    let path = save_path(&settings.app_storage, time::timestamp_secs());
    let bytes = canvas.export_snapshot(settings.save_quality)?;
    write_snapshot(&path, &bytes)?;
    Ok(path)
}

/// Write the composite to the fixed share location, replacing any earlier one.
pub fn export_for_share(canvas: &DrawingCanvas, settings: &Settings) -> Result<PathBuf, ExportError> {
    let path = share_path(&settings.external_storage);
    let bytes = canvas.export_snapshot(settings.share_quality)?;
    write_snapshot(&path, &bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_path_layout() {
        let path = save_path(Path::new("/data/app"), 1_700_000_000);
        assert_eq!(
            path,
            PathBuf::from("/data/app/Demo_app/demo_app1700000000.jpg")
        );
    }

    #[test]
    fn test_share_path_keeps_png_name() {
        let path = share_path(Path::new("/sdcard"));
        assert_eq!(path, PathBuf::from("/sdcard/android_drawing_app.png"));
    }

    #[test]
    fn test_encode_jpeg_produces_jpeg_magic() {
        let mut pixmap = Pixmap::new(16, 16).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);
        let bytes = encode_jpeg(&pixmap, 80).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_write_snapshot_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.jpg");
        write_snapshot(&path, b"abc").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"abc");
    }
}
