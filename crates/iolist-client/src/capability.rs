//! Capabilities the upload submitter needs from its host environment.
//!
//! The browser implementations live in `iolist-io`; tests use
//! recording fakes. None of the traits require `Send` because the
//! client runs on the browser's single UI thread.

use crate::reply::UploadError;
use crate::submit::DownloadLink;

/// Status and body of the response to an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body text, decoded by the caller.
    pub body: String,
}

impl HttpReply {
    /// Create a reply from a status code and body text.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range (the `fetch` `ok` flag).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// The upload payload could not be built from the submitted form.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The event did not originate from a form element.
    #[error("submit event has no form element")]
    NoForm,

    /// A browser API call failed while collecting the form fields.
    #[error("failed to collect form fields: {0}")]
    JsError(String),
}

/// The download link could not be placed in the page.
#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    /// No element carries the configured container id.
    #[error("no element with id `{0}` to hold the download link")]
    MissingContainer(String),

    /// A browser API call failed while building or inserting the link.
    #[error("browser API error: {0}")]
    JsError(String),
}

/// A form submission event.
///
/// The submitter calls [`prevent_default`](Self::prevent_default) before
/// it does anything else, then asks for the payload once.
pub trait FormSubmission {
    /// The encoded form fields, e.g. a browser `FormData`.
    type Payload;

    /// Cancel the browser's own form navigation.
    fn prevent_default(&self);

    /// Collect the form's fields, unchanged, into a multipart payload.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] if the fields cannot be collected.
    fn payload(&self) -> Result<Self::Payload, PayloadError>;
}

/// Sends an upload payload and returns the raw reply.
#[allow(async_fn_in_trait)] // single-threaded; callers never need `Send` futures
pub trait UploadTransport {
    /// The payload type this transport can send.
    type Payload;

    /// POST `payload` to `endpoint` and read the whole response body.
    ///
    /// Any HTTP status is a successful exchange; only failures that
    /// prevent receiving or reading a response are errors.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Transport`] when the request is rejected or
    /// the body cannot be read.
    async fn post(&self, endpoint: &str, payload: Self::Payload) -> Result<HttpReply, UploadError>;
}

/// User-facing messages and the diagnostic channel.
pub trait Notifier {
    /// Show a blocking message to the user.
    fn alert(&self, message: &str);

    /// Record a failure for diagnostics. Never shown to the user.
    fn log_error(&self, context: &str, detail: &str);
}

/// Places persistent download links in the page.
pub trait LinkPresenter {
    /// Append `link` to the element with id `container_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError::MissingContainer`] if no such element
    /// exists.
    fn present(&self, container_id: &str, link: &DownloadLink) -> Result<(), PresentError>;
}

/// Schedules the delayed navigation that follows a successful upload.
pub trait RedirectScheduler {
    /// A scheduled redirect. Dropping the handle cancels it.
    type Handle;

    /// Navigate to `target` after `delay_ms` milliseconds.
    fn schedule(&self, target: &str, delay_ms: u32) -> Self::Handle;
}
