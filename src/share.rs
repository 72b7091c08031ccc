//! Handing an exported drawing to the operating system.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use crate::canvas::DrawingCanvas;
use crate::error::ShareError;
use crate::export;
use crate::settings::Settings;

/// MIME type announced when sharing. The file itself holds JPEG data.
pub const SHARE_MIME: &str = "image/png";

/// Receives files the user chose to share.
pub trait ShareTarget {
    fn share(&self, path: &Path, mime: &str) -> Result<(), ShareError>;
}

/// Opens the file with the desktop's default handler for its type.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShare;

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "cmd";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

fn opener_command(path: &Path) -> Command {
    let mut command = Command::new(OPENER);
    if cfg!(target_os = "windows") {
        command.args(["/C", "start", ""]);
    }
    command.arg(path);
    command
}

impl ShareTarget for SystemShare {
    fn share(&self, path: &Path, mime: &str) -> Result<(), ShareError> {
        log::info!("Sharing {} ({}) via {}", path.display(), mime, OPENER);
        let mut child = opener_command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ShareError::Launch {
                program: OPENER,
                source,
            })?;

        // reap the opener without blocking the UI
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => log::warn!("{} exited with {}", OPENER, status),
            Ok(_) => {}
            Err(err) => log::warn!("Failed to wait for {}: {}", OPENER, err),
        });
        Ok(())
    }
}

/// Export the canvas to the share location and pass it to `target`.
pub fn share_drawing(
    canvas: &DrawingCanvas,
    settings: &Settings,
    target: &dyn ShareTarget,
) -> Result<PathBuf, ShareError> {
    let path = export::export_for_share(canvas, settings)?;
    target.share(&path, SHARE_MIME)?;
    Ok(path)
}
