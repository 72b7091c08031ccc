#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod controller;
pub mod error;
pub mod export;
pub mod fetch;
pub mod input;
pub mod orientation;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod share;
pub mod stroke;
pub mod surface;
pub mod util;

pub use app::PaintApp;
pub use canvas::{DrawingCanvas, ImagePlacement};
pub use controller::{HostController, Status};
pub use error::{CanvasError, ExportError, FetchError, ShareError};
pub use fetch::{FetchTask, HttpImageSource, ImageSource};
pub use input::{InputHandler, TouchEvent};
pub use orientation::{Orientation, OrientationController, WindowOrientation};
pub use renderer::Renderer;
pub use settings::Settings;
pub use share::{ShareTarget, SystemShare};
pub use stroke::{Brush, Stroke};
