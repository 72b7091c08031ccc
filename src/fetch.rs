//! Fetching a random image over HTTP on a background thread.

use std::io::Read;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;

use futures::channel::oneshot;
use image::RgbaImage;

use crate::error::FetchError;

pub const DEFAULT_IMAGE_URL: &str = "http://thecatapi.com/api/images/get?format=src&type=png";

/// Responses larger than this are treated as a read error.
const MAX_IMAGE_BYTES: u64 = 32 * 1024 * 1024;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

pub type FetchResult = Result<RgbaImage, FetchError>;

/// Something that can produce the raw bytes of an image.
pub trait ImageSource: Send + Sync {
    fn fetch_bytes(&self) -> Result<Vec<u8>, FetchError>;
}

/// One unauthenticated GET against a fixed URL.
pub struct HttpImageSource {
    agent: ureq::Agent,
    url: String,
}

impl HttpImageSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ImageSource for HttpImageSource {
    fn fetch_bytes(&self) -> Result<Vec<u8>, FetchError> {
        log::debug!("GET {}", self.url);
        let response = self.agent.get(&self.url).call().map_err(Box::new)?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_IMAGE_BYTES + 1)
            .read_to_end(&mut bytes)?;
        if bytes.len() as u64 > MAX_IMAGE_BYTES {
            return Err(FetchError::Io(std::io::Error::other(format!(
                "response exceeds {} bytes",
                MAX_IMAGE_BYTES
            ))));
        }
        Ok(bytes)
    }
}

/// Fetch and decode on the calling thread.
pub fn fetch_image(source: &dyn ImageSource) -> FetchResult {
    let bytes = source.fetch_bytes()?;
    let image = image::load_from_memory(&bytes)?;
    log::debug!("Decoded image: {}x{}", image.width(), image.height());
    Ok(image.to_rgba8())
}

/// Handle to a fetch running on a worker thread.
///
/// Dropping the handle cancels the fetch; a cancelled worker discards its
/// result instead of delivering it.
pub struct FetchTask {
    id: u64,
    cancelled: Arc<AtomicBool>,
    receiver: oneshot::Receiver<FetchResult>,
}

impl std::fmt::Debug for FetchTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchTask")
            .field("id", &self.id)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl FetchTask {
    /// Start fetching from `source`. `on_complete` runs on the worker once a
    /// result is ready, e.g. to request a repaint.
    pub fn spawn<F>(source: Arc<dyn ImageSource>, on_complete: F) -> Result<Self, FetchError>
    where
        F: FnOnce() + Send + 'static,
    {
        let id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
        let cancelled = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = oneshot::channel();

        let worker_cancelled = Arc::clone(&cancelled);
        thread::Builder::new()
            .name(format!("image-fetch-{}", id))
            .spawn(move || {
                let result = fetch_image(source.as_ref());
                if worker_cancelled.load(Ordering::Acquire) {
                    log::debug!("Fetch {} finished after cancellation; dropping result", id);
                    return;
                }
                if sender.send(result).is_err() {
                    log::debug!("Fetch {} handle is gone", id);
                    return;
                }
                on_complete();
            })?;

        log::info!("Started image fetch {}", id);
        Ok(Self {
            id,
            cancelled,
            receiver,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Non-blocking check for a result. Once this returns `Some` the task is done.
    pub fn poll(&mut self) -> Option<FetchResult> {
        match self.receiver.try_recv() {
            Ok(result) => result,
            Err(oneshot::Canceled) => Some(Err(FetchError::Cancelled)),
        }
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            log::debug!("Cancelling image fetch {}", self.id);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
