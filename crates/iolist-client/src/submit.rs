//! The upload submitter: one form submission from "prevent navigation"
//! to "show result".
//!
//! A submission runs in two phases so the synchronous part is done while
//! the browser is still dispatching the submit event:
//!
//! 1. [`UploadSubmitter::begin`] cancels the default navigation and
//!    collects the form payload. It never suspends.
//! 2. [`UploadSubmitter::complete`] posts the payload, reads the reply,
//!    and reports the outcome. It suspends while the request is in
//!    flight and again while the body is read.
//!
//! Submissions are independent. Nothing stops a second one from starting
//! while the first is awaiting its reply; each presents its own link and
//! schedules its own redirect.

use std::cell::RefCell;

use crate::capability::{
    FormSubmission, LinkPresenter, Notifier, PayloadError, RedirectScheduler, UploadTransport,
};
use crate::config::ClientConfig;
use crate::reply::{GENERIC_FAILURE, UploadError, UploadOutcome};

/// Diagnostic context for failures on the exception path.
pub const UPLOAD_FAILED_CONTEXT: &str = "Upload failed:";

/// Diagnostic context for forms whose fields could not be collected.
pub const PAYLOAD_FAILED_CONTEXT: &str = "Upload aborted:";

/// A persistent link to a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// Target of the link, exactly as the server returned it.
    pub href: String,
    /// Visible text.
    pub label: String,
}

/// A submission whose navigation has been cancelled and whose payload
/// has been collected. Only [`UploadSubmitter::begin`] creates one.
#[derive(Debug)]
pub struct PreparedUpload<P> {
    payload: Result<P, PayloadError>,
}

/// What one submission did.
#[derive(Debug)]
pub enum SubmitReport {
    /// 2xx reply; the success message was shown and a redirect scheduled.
    Uploaded {
        /// The link target offered to the user, if the reply named one.
        output_file: Option<String>,
    },
    /// Non-2xx reply; the reason was shown.
    Rejected {
        /// The reason as shown, after fallback.
        error: String,
    },
    /// Exception path: logged and the generic failure message shown.
    Failed(UploadError),
    /// The form fields could not be collected; nothing was sent.
    Aborted(PayloadError),
}

/// Drives form submissions against the converter's upload endpoint.
///
/// Owns every redirect it has scheduled. Dropping the submitter (or
/// calling [`cancel_pending_redirects`](Self::cancel_pending_redirects))
/// cancels the ones that have not fired yet.
pub struct UploadSubmitter<T, N, L, S: RedirectScheduler> {
    config: ClientConfig,
    transport: T,
    notifier: N,
    presenter: L,
    scheduler: S,
    pending_redirects: RefCell<Vec<S::Handle>>,
}

impl<T, N, L, S> UploadSubmitter<T, N, L, S>
where
    T: UploadTransport,
    N: Notifier,
    L: LinkPresenter,
    S: RedirectScheduler,
{
    /// Create a submitter from its configuration and capabilities.
    pub const fn new(
        config: ClientConfig,
        transport: T,
        notifier: N,
        presenter: L,
        scheduler: S,
    ) -> Self {
        Self {
            config,
            transport,
            notifier,
            presenter,
            scheduler,
            pending_redirects: RefCell::new(Vec::new()),
        }
    }

    /// The configuration this submitter was built with.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Start a submission: cancel the form's default navigation, then
    /// collect its payload.
    ///
    /// Must be called from inside the submit event handler, before
    /// control returns to the browser.
    pub fn begin<E>(&self, event: &E) -> PreparedUpload<T::Payload>
    where
        E: FormSubmission<Payload = T::Payload>,
    {
        event.prevent_default();
        PreparedUpload {
            payload: event.payload(),
        }
    }

    /// Finish a submission started with [`begin`](Self::begin).
    #[allow(clippy::future_not_send)] // WASM is single-threaded; capabilities are !Sync
    pub async fn complete(&self, prepared: PreparedUpload<T::Payload>) -> SubmitReport {
        let payload = match prepared.payload {
            Ok(payload) => payload,
            Err(e) => {
                self.notifier
                    .log_error(PAYLOAD_FAILED_CONTEXT, &e.to_string());
                return SubmitReport::Aborted(e);
            }
        };

        let outcome = match self.exchange(payload).await {
            Ok(outcome) => outcome,
            Err(e) => return self.fail(e),
        };

        self.notifier.alert(&outcome.alert_text());

        match outcome {
            UploadOutcome::Succeeded { output_file, .. } => {
                if let Some(href) = &output_file {
                    let link = DownloadLink {
                        href: href.clone(),
                        label: self.config.download_link_label.clone(),
                    };
                    if let Err(e) = self.presenter.present(&self.config.container_id, &link) {
                        return self.fail(e.into());
                    }
                }
                let handle = self
                    .scheduler
                    .schedule(&self.config.redirect_target, self.config.redirect_delay_ms);
                self.pending_redirects.borrow_mut().push(handle);
                SubmitReport::Uploaded { output_file }
            }
            UploadOutcome::Rejected { error } => SubmitReport::Rejected { error },
        }
    }

    /// Number of redirects scheduled and not cancelled by this submitter.
    ///
    /// Redirects that have already fired are still counted; the page is
    /// navigating away at that point.
    pub fn pending_redirects(&self) -> usize {
        self.pending_redirects.borrow().len()
    }

    /// Cancel every redirect this submitter has scheduled.
    pub fn cancel_pending_redirects(&self) {
        self.pending_redirects.borrow_mut().clear();
    }

    #[allow(clippy::future_not_send)]
    async fn exchange(&self, payload: T::Payload) -> Result<UploadOutcome, UploadError> {
        let reply = self
            .transport
            .post(&self.config.upload_endpoint, payload)
            .await?;
        UploadOutcome::classify(&reply)
    }

    fn fail(&self, error: UploadError) -> SubmitReport {
        self.notifier
            .log_error(UPLOAD_FAILED_CONTEXT, &error.to_string());
        self.notifier.alert(GENERIC_FAILURE);
        SubmitReport::Failed(error)
    }
}
