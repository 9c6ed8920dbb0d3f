//! Client configuration injected at startup.

use serde::{Deserialize, Serialize};

/// Errors produced while loading or validating a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration JSON could not be parsed.
    #[error("failed to parse client configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the client cannot work with.
    #[error("invalid client configuration: {0}")]
    Invalid(String),
}

/// Deployment-specific values used by the download trigger and the
/// upload submitter.
///
/// Every field has a default matching the converter's stock deployment,
/// so a partial JSON object (or none at all) is enough to configure the
/// client. See [`ClientConfig::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port that download paths are resolved against.
    ///
    /// Paths are appended verbatim, so this should not end with `/`.
    pub download_origin: String,

    /// Endpoint the upload form is posted to.
    pub upload_endpoint: String,

    /// `id` of the element that receives the post-upload download link.
    pub container_id: String,

    /// Visible text of the post-upload download link.
    pub download_link_label: String,

    /// Where the page navigates after a successful upload.
    pub redirect_target: String,

    /// Delay before the post-upload redirect, in milliseconds.
    pub redirect_delay_ms: u32,
}

impl ClientConfig {
    /// Default value for [`download_origin`](Self::download_origin).
    pub const DEFAULT_DOWNLOAD_ORIGIN: &'static str = "http://127.0.0.1:8000";

    /// Default value for [`upload_endpoint`](Self::upload_endpoint).
    pub const DEFAULT_UPLOAD_ENDPOINT: &'static str = "/upload/";

    /// Default value for [`container_id`](Self::container_id).
    pub const DEFAULT_CONTAINER_ID: &'static str = "download-container";

    /// Default value for [`download_link_label`](Self::download_link_label).
    pub const DEFAULT_DOWNLOAD_LINK_LABEL: &'static str = "Click here to download the file";

    /// Default value for [`redirect_target`](Self::redirect_target).
    pub const DEFAULT_REDIRECT_TARGET: &'static str = "/";

    /// Default value for [`redirect_delay_ms`](Self::redirect_delay_ms).
    pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 5000;

    /// Parse a configuration from a JSON object.
    ///
    /// Missing fields keep their defaults. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the fields the client concatenates or looks up are
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("download_origin", &self.download_origin),
            ("upload_endpoint", &self.upload_endpoint),
            ("container_id", &self.container_id),
            ("redirect_target", &self.redirect_target),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            download_origin: Self::DEFAULT_DOWNLOAD_ORIGIN.to_owned(),
            upload_endpoint: Self::DEFAULT_UPLOAD_ENDPOINT.to_owned(),
            container_id: Self::DEFAULT_CONTAINER_ID.to_owned(),
            download_link_label: Self::DEFAULT_DOWNLOAD_LINK_LABEL.to_owned(),
            redirect_target: Self::DEFAULT_REDIRECT_TARGET.to_owned(),
            redirect_delay_ms: Self::DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}
