//! Host-side glue between toolbar actions and the canvas.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use egui::{Color32, Vec2};

use crate::canvas::DrawingCanvas;
use crate::error::CanvasError;
use crate::export;
use crate::fetch::{FetchResult, FetchTask, HttpImageSource, ImageSource};
use crate::input::TouchEvent;
use crate::orientation::WindowOrientation;
use crate::settings::Settings;
use crate::share::{self, ShareTarget, SystemShare};

/// Outcome of the last host action, shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Saved(PathBuf),
    Shared(PathBuf),
    FetchStarted,
    ImageAdded,
    Error(String),
}

impl Status {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved(path) => write!(f, "Saved to {}", path.display()),
            Self::Shared(path) => write!(f, "Shared {}", path.display()),
            Self::FetchStarted => write!(f, "Fetching a random image…"),
            Self::ImageAdded => write!(f, "Image added"),
            Self::Error(message) => write!(f, "{}", message),
        }
    }
}

/// Owns the canvas, the orientation state, and pending fetches.
///
/// The canvas is created lazily because its size is the size of the canvas
/// view, which is only known once the first frame lays it out.
pub struct HostController {
    settings: Settings,
    canvas: Option<DrawingCanvas>,
    orientation: WindowOrientation,
    fetches: Vec<FetchTask>,
    source: Arc<dyn ImageSource>,
    share_target: Box<dyn ShareTarget>,
    status: Option<Status>,
}

impl HostController {
    pub fn new(settings: Settings) -> Self {
        let source = Arc::new(HttpImageSource::new(settings.image_url.clone()));
        Self::with_services(settings, source, Box::new(SystemShare))
    }

    pub fn with_services(
        mut settings: Settings,
        source: Arc<dyn ImageSource>,
        share_target: Box<dyn ShareTarget>,
    ) -> Self {
        settings.validate();
        Self {
            settings,
            canvas: None,
            orientation: WindowOrientation::new(),
            fetches: Vec::new(),
            source,
            share_target,
            status: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn canvas(&self) -> Option<&DrawingCanvas> {
        self.canvas.as_ref()
    }

    pub fn orientation(&self) -> &WindowOrientation {
        &self.orientation
    }

    pub fn orientation_mut(&mut self) -> &mut WindowOrientation {
        &mut self.orientation
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn pending_fetches(&self) -> usize {
        self.fetches.len()
    }

    /// Create the canvas on first use. `view_size` wins over the configured
    /// fallback size when known.
    pub fn ensure_canvas(&mut self, view_size: Option<Vec2>) -> Result<&mut DrawingCanvas, CanvasError> {
        let canvas = match self.canvas.take() {
            Some(canvas) => canvas,
            None => {
                let [width, height] = match view_size {
                    Some(size) if size.x >= 1.0 && size.y >= 1.0 => {
                        [size.x.round() as u32, size.y.round() as u32]
                    }
                    _ => self.settings.canvas_size,
                };
                DrawingCanvas::new(
                    width,
                    height,
                    self.settings.background_color(),
                    self.settings.brush(),
                )?
            }
        };
        Ok(self.canvas.insert(canvas))
    }

    fn report(&mut self, status: Status) {
        if status.is_error() {
            log::error!("{}", status);
        } else {
            log::info!("{}", status);
        }
        self.status = Some(status);
    }

    pub fn handle_touch(&mut self, event: TouchEvent) {
        if let Some(canvas) = &mut self.canvas {
            canvas.handle_touch(event, &mut self.orientation);
        }
    }

    /// The confirmation dialog's "yes" path.
    pub fn confirm_clear(&mut self) {
        if let Some(canvas) = &mut self.canvas {
            canvas.clear(&mut self.orientation);
        }
    }

    pub fn brush_color(&self) -> Color32 {
        self.settings.brush().color
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        log::info!("Brush color set to {:?}", color);
        self.settings.set_brush_color(color);
        if let Some(canvas) = &mut self.canvas {
            canvas.set_brush_color(color);
        }
    }

    pub fn save(&mut self) -> Option<PathBuf> {
        let canvas = self.canvas.as_ref()?;
        match export::save_picture(canvas, &self.settings) {
            Ok(path) => {
                self.report(Status::Saved(path.clone()));
                Some(path)
            }
            Err(err) => {
                self.report(Status::Error(format!("Save failed: {}", err)));
                None
            }
        }
    }

    pub fn share(&mut self) -> Option<PathBuf> {
        let canvas = self.canvas.as_ref()?;
        match share::share_drawing(canvas, &self.settings, self.share_target.as_ref()) {
            Ok(path) => {
                self.report(Status::Shared(path.clone()));
                Some(path)
            }
            Err(err) => {
                self.report(Status::Error(format!("Share failed: {}", err)));
                None
            }
        }
    }

    /// Start another fetch. Fetches already in flight keep running.
    pub fn start_fetch<F>(&mut self, on_complete: F)
    where
        F: FnOnce() + Send + 'static,
    {
        match FetchTask::spawn(Arc::clone(&self.source), on_complete) {
            Ok(task) => {
                self.fetches.push(task);
                self.report(Status::FetchStarted);
            }
            Err(err) => self.report(Status::Error(format!("Could not start fetch: {}", err))),
        }
    }

    /// Apply every fetch that finished since the last call. Returns how many.
    pub fn poll_fetches(&mut self) -> usize {
        let mut finished = Vec::new();
        self.fetches.retain_mut(|task| match task.poll() {
            Some(result) => {
                finished.push(result);
                false
            }
            None => true,
        });

        let count = finished.len();
        for result in finished {
            self.complete_fetch(result);
        }
        count
    }

    /// The canvas is cleared before the result is inspected, so a failed fetch
    /// still wipes the drawing.
    pub fn complete_fetch(&mut self, result: FetchResult) {
        let Some(canvas) = &mut self.canvas else {
            return;
        };
        canvas.clear(&mut self.orientation);

        let status = match result {
            Ok(image) => match canvas.composite_image(&image) {
                Ok(_) => Status::ImageAdded,
                Err(err) => Status::Error(format!("Could not add image: {}", err)),
            },
            Err(err) => Status::Error(format!("Image fetch failed: {}", err)),
        };
        self.report(status);
    }

    /// Cancel every pending fetch; used on teardown.
    pub fn cancel_fetches(&mut self) {
        if !self.fetches.is_empty() {
            log::info!("Cancelling {} pending fetch(es)", self.fetches.len());
        }
        for task in self.fetches.drain(..) {
            task.cancel();
        }
    }
}

impl Drop for HostController {
    fn drop(&mut self) {
        self.cancel_fetches();
    }
}
