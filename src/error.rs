use thiserror::Error;

/// Errors raised by canvas operations
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("cannot allocate a {width}x{height} drawing surface")]
    SurfaceSize { width: u32, height: u32 },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Errors that can occur while exporting a snapshot of the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while handing a snapshot to the system
#[derive(Debug, Error)]
pub enum ShareError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while fetching the remote image
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("failed to read response: {0}")]
    Io(#[from] std::io::Error),

    #[error("response is not a decodable image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("fetch was cancelled")]
    Cancelled,
}
