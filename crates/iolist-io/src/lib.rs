//! iolist-io: Browser I/O and Dioxus component library.
//!
//! Implements the `iolist-client` capabilities on top of the browser
//! (`fetch`, `alert`, `console`, the DOM, `setTimeout`), triggers
//! anchor-click downloads, loads startup configuration from the page,
//! and provides the UI components of the iolist web application.
//!
//! Also exports `downloadFile` and `uploadFile` to JavaScript for pages
//! rendered by the converter's own templates.

pub mod components;
pub mod config;
pub mod download;
pub mod fetch;
pub mod form;
pub mod links;
pub mod notify;
pub mod redirect;
pub mod submitter;

pub use components::{DownloadPanel, UploadForm};
pub use submitter::{BrowserSubmitter, browser_submitter};
