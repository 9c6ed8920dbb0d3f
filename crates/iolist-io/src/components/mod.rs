//! Dioxus UI components for iolist.
//!
//! Provides the CAEX upload form with its download-link container and
//! the panel for downloading a converted file by its server path.

mod download_panel;
mod upload;

pub use download_panel::DownloadPanel;
pub use upload::{UPLOAD_FORM_ID, UploadForm};
