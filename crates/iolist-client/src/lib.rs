//! iolist-client: Upload and download logic for the IO-list converter (sans-IO).
//!
//! Computes download URLs and filenames, decodes and classifies the
//! converter's `/upload/` replies, and drives a single form submission
//! from "prevent navigation" through "show result".
//!
//! This crate has **no browser dependencies** -- every side effect
//! (alerts, console logging, DOM links, timers, `fetch`) goes through the
//! capability traits in [`capability`]. The browser implementations live
//! in `iolist-io`.

pub mod capability;
pub mod config;
pub mod download;
pub mod reply;
pub mod submit;

pub use capability::{
    FormSubmission, HttpReply, LinkPresenter, Notifier, PayloadError, PresentError,
    RedirectScheduler, UploadTransport,
};
pub use config::{ClientConfig, ConfigError};
pub use download::{DownloadPlan, DownloadRequest};
pub use reply::{UploadError, UploadOutcome, UploadReply};
pub use submit::{DownloadLink, PreparedUpload, SubmitReport, UploadSubmitter};
