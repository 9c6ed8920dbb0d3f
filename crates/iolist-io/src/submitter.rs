//! The upload submitter wired to browser capabilities.

use std::rc::Rc;

use iolist_client::{ClientConfig, UploadSubmitter};
use wasm_bindgen::prelude::*;

use crate::fetch::FetchTransport;
use crate::form::DomSubmission;
use crate::links::DomLinkPresenter;
use crate::notify::BrowserNotifier;
use crate::redirect::TimeoutRedirects;

/// An [`UploadSubmitter`] using `fetch`, `alert`, the DOM, and
/// `setTimeout`.
pub type BrowserSubmitter =
    UploadSubmitter<FetchTransport, BrowserNotifier, DomLinkPresenter, TimeoutRedirects>;

/// Build a browser submitter for `config`.
///
/// Keep it alive for as long as the page: dropping it cancels any
/// redirect it has scheduled.
#[must_use]
pub const fn browser_submitter(config: ClientConfig) -> BrowserSubmitter {
    UploadSubmitter::new(
        config,
        FetchTransport,
        BrowserNotifier,
        DomLinkPresenter,
        TimeoutRedirects,
    )
}

thread_local! {
    /// Page-lifetime submitter behind the `uploadFile` export.
    static PAGE_SUBMITTER: Rc<BrowserSubmitter> =
        Rc::new(browser_submitter(crate::config::load()));
}

/// JavaScript entry point for server-rendered forms:
/// `<form onsubmit="uploadFile(event)">`.
///
/// Cancels the form's navigation before returning, then finishes the
/// upload in the background.
#[wasm_bindgen(js_name = uploadFile)]
pub fn upload_file(event: &web_sys::Event) {
    let submitter = PAGE_SUBMITTER.with(Rc::clone);
    let prepared = submitter.begin(&DomSubmission::new(event));
    wasm_bindgen_futures::spawn_local(async move {
        submitter.complete(prepared).await;
    });
}
