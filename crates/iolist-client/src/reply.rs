//! Decoding and classification of `/upload/` replies.
//!
//! The converter answers with a JSON object: `{message, output_file}` on
//! success and `{error?}` otherwise. Nothing enforces that shape; absent
//! fields fall back to display defaults and unknown fields are ignored.

use serde_json::{Map, Value};

use crate::capability::{HttpReply, PresentError};

/// Shown after `Error: ` when a failed reply carries no usable `error`.
pub const FALLBACK_ERROR: &str = "An error occurred.";

/// Shown when no reply could be received or decoded.
pub const GENERIC_FAILURE: &str = "An error occurred while uploading the file.";

/// Errors that end an upload on the exception path.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The request was rejected or the response body could not be read.
    #[error("upload request failed: {0}")]
    Transport(String),

    /// The response body is not valid JSON.
    #[error("failed to decode upload response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response body is JSON but not an object.
    #[error("upload response is not a JSON object")]
    NotAnObject,

    /// The download link could not be placed in the page.
    #[error(transparent)]
    Present(#[from] PresentError),
}

/// The fields of an upload reply, loosely typed.
///
/// Non-string values are kept as their JSON text so that whatever the
/// server sent is what the user sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReply {
    /// Human-readable result of a successful conversion.
    pub message: Option<String>,
    /// Server-relative path of the generated file.
    pub output_file: Option<String>,
    /// Human-readable reason for a failure.
    pub error: Option<String>,
}

impl UploadReply {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Decode`] if `body` is not JSON and
    /// [`UploadError::NotAnObject`] if it is JSON of another kind.
    pub fn from_body(body: &str) -> Result<Self, UploadError> {
        let value: Value = serde_json::from_str(body)?;
        let Value::Object(fields) = value else {
            return Err(UploadError::NotAnObject);
        };
        Ok(Self {
            message: text_field(&fields, "message"),
            output_file: text_field(&fields, "output_file"),
            error: text_field(&fields, "error"),
        })
    }
}

/// Read `key` as display text. `null` counts as absent.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// What an upload reply means for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 2xx: the file was converted.
    Succeeded {
        /// Message to show; empty when the server sent none.
        message: String,
        /// Path of the generated file, if the server named one.
        output_file: Option<String>,
    },
    /// Any other status: the server refused or failed the conversion.
    Rejected {
        /// Reason to show, already defaulted to [`FALLBACK_ERROR`].
        error: String,
    },
}

impl UploadOutcome {
    /// Decode `reply.body` and branch on `reply.status`.
    ///
    /// The body is decoded before the status is looked at, so an
    /// undecodable body is an error whatever the status.
    ///
    /// # Errors
    ///
    /// Returns the decoding errors of [`UploadReply::from_body`].
    pub fn classify(reply: &HttpReply) -> Result<Self, UploadError> {
        let fields = UploadReply::from_body(&reply.body)?;
        if reply.is_success() {
            Ok(Self::Succeeded {
                message: fields.message.unwrap_or_default(),
                output_file: fields.output_file.filter(|path| !path.is_empty()),
            })
        } else {
            Ok(Self::Rejected {
                error: fields
                    .error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR.to_owned()),
            })
        }
    }

    /// The text of the blocking message for this outcome.
    #[must_use]
    pub fn alert_text(&self) -> String {
        match self {
            Self::Succeeded { message, .. } => format!("Success: {message}"),
            Self::Rejected { error } => format!("Error: {error}"),
        }
    }
}
