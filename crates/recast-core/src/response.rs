//! Interpretation of the conversion endpoint's responses.
//!
//! A successful conversion comes back as a binary body (download); any
//! other response carries a JSON body with an optional `error` field.

use std::num::FpCategory;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content-type prefixes treated as a converted file.
const BINARY_PREFIXES: &[&str] = &["audio/", "image/", "application/", "text/"];

/// Generic message for a refused conversion without a server message.
pub const CONVERSION_FAILED_MESSAGE: &str = "Conversion failed";

/// Generic message for network and parsing failures.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred during conversion";

/// Errors reported to the user at the end of a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The server supplied its own error message.
    #[error("{0}")]
    Server(String),

    /// Non-success status without a usable error message.
    #[error("Conversion failed")]
    Rejected,

    /// Network failure or unreadable response. The detail is logged,
    /// never shown.
    #[error("An error occurred during conversion")]
    Transport(String),
}

/// A converted file ready to hand to the host's download capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    /// Name to save the file under.
    pub filename: String,
    /// Response content type, used for the Blob.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Terminal result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The server returned a converted file.
    Download(DownloadFile),
    /// Structured success response without an error; nothing to show.
    Quiet,
    /// The submission failed; the error is shown to the user.
    Failed(ConversionError),
}

impl ConversionOutcome {
    /// Message to alert the user with, if any.
    #[must_use]
    pub fn alert_message(&self) -> Option<String> {
        match self {
            Self::Failed(err) => Some(err.to_string()),
            Self::Download(_) | Self::Quiet => None,
        }
    }
}

/// Quoted `filename` parameter of a `Content-Disposition` header.
static FILENAME_PARAM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"filename="([^"]+)""#).ok());

/// Structured body of a non-file response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error value, when the server reports one. Usually a string.
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorBody {
    /// Parse a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `body` is not a JSON object.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// The message to show for this body, if any.
    ///
    /// `null`, `false`, zero and the empty string mean "no error". Other
    /// scalars are shown as written; arrays and objects as JSON text.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero) => {
                None
            }
            other => Some(other.to_string()),
        }
    }
}

/// Whether `content_type` denotes a converted file rather than JSON
/// error data. Note `application/json` counts as a file here.
#[must_use]
pub fn is_binary_content_type(content_type: &str) -> bool {
    let lower = content_type.trim_start().to_ascii_lowercase();
    BINARY_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Extract the quoted filename from a `Content-Disposition` header.
///
/// Only the `filename="<name>"` form is recognised; an unquoted or
/// empty name yields `None`. Everything between the quotes is taken
/// as-is, separators included.
#[must_use]
pub fn filename_from_disposition(header: &str) -> Option<String> {
    FILENAME_PARAM
        .as_ref()?
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Filename used when the response does not name the file.
#[must_use]
pub fn fallback_filename(output_format: &str) -> String {
    format!("converted.{output_format}")
}

/// Name for a downloaded file: the header's name or the fallback.
#[must_use]
pub fn download_filename(content_disposition: Option<&str>, output_format: &str) -> String {
    content_disposition
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| fallback_filename(output_format))
}
