//! Download planning: turn a server-relative path into the URL and
//! suggested filename for a synthesized anchor click.
//!
//! The browser side (`iolist-io::download`) executes a [`DownloadPlan`];
//! everything here is pure string work.

use crate::config::ClientConfig;

/// A request to download one file the server has produced.
///
/// `output_file` is trusted as-is: it is expected to start with `/` and
/// name a path the server will serve, but nothing checks that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Server-relative path of the file, e.g. `/files/report.xlsx`.
    pub output_file: String,
}

/// The absolute URL and suggested local filename for a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    /// Origin and path concatenated verbatim.
    pub url: String,
    /// Final path segment, used as the anchor's `download` hint.
    pub filename: String,
}

impl DownloadRequest {
    /// Create a request for `output_file`.
    #[must_use]
    pub fn new(output_file: impl Into<String>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// Resolve this request against the configured download origin.
    #[must_use]
    pub fn plan(&self, config: &ClientConfig) -> DownloadPlan {
        DownloadPlan {
            url: download_url(&config.download_origin, &self.output_file),
            filename: suggested_filename(&self.output_file).to_owned(),
        }
    }
}

/// Concatenate `origin` and `path` with no normalization or encoding.
#[must_use]
pub fn download_url(origin: &str, path: &str) -> String {
    format!("{origin}{path}")
}

/// The substring of `path` after its last `/`.
///
/// A path without any separator is returned unchanged; a path ending in
/// `/` yields an empty name, which leaves the choice to the browser.
#[must_use]
pub fn suggested_filename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}
