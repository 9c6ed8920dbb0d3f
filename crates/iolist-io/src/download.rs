//! File download via a synthesized anchor click.
//!
//! Dioxus has no built-in file download API.  This module triggers
//! downloads of files the converter already serves by creating a
//! temporary `<a href=... download=...>` element, clicking it, and
//! removing it again.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use iolist_client::{ClientConfig, DownloadPlan, DownloadRequest};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Download the server file at `output_file`, resolved against the
/// configured download origin.
///
/// The path is not checked; a wrong path produces a failed download in
/// the browser, not an error here.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails.
pub fn trigger_download(config: &ClientConfig, output_file: &str) -> Result<(), DownloadError> {
    click_anchor(&DownloadRequest::new(output_file).plan(config))
}

/// Create a temporary anchor for `plan`, click it, and remove it.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the window, document, or body
/// is missing, or if the anchor cannot be created or attached.
pub fn click_anchor(plan: &DownloadPlan) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(&plan.url);
    anchor.set_download(&plan.filename);

    // The click only starts a download while the anchor is attached.
    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup — the download is already initiated.
    let _ = body.remove_child(&anchor);

    Ok(())
}

/// JavaScript entry point for server-rendered templates:
/// `downloadFile("/files/report.xlsx")`.
///
/// Failures are written to the console; the caller gets nothing back.
#[wasm_bindgen(js_name = downloadFile)]
pub fn download_file(output_file: &str) {
    if let Err(e) = trigger_download(&config::load(), output_file) {
        web_sys::console::error_2(&JsValue::from_str("Download failed:"), &e.to_string().into());
    }
}
