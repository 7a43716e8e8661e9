//! Submitting a conversion request and settling its outcome.
//!
//! [`convert`] sends one request through a [`Transport`] and maps every
//! possible response, or transport failure, to a [`ConversionOutcome`].
//! [`deliver`] hands that outcome to the [`Host`] that owns the
//! download and alert side channels.

use std::future::Future;

use crate::response::{
    ConversionError, ConversionOutcome, DownloadFile, ErrorBody, download_filename,
    is_binary_content_type,
};

/// One multipart conversion request.
///
/// Built fresh per submission by
/// [`UploadState::begin_submission`](crate::state::UploadState::begin_submission);
/// never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Original filename, sent as the file part's filename.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
    /// MIME type of the file part.
    pub content_type: String,
    /// Chosen output extension.
    pub output_format: String,
    /// Optional base name for the converted file.
    pub custom_filename: Option<String>,
}

/// The parts of an HTTP response the widget looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// `Content-Disposition` header, if present.
    pub content_disposition: Option<String>,
    /// Full response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failure to obtain a response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built.
    #[error("failed to build request: {0}")]
    Request(String),

    /// The request was sent but no response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Sends a [`ConversionRequest`] to the conversion endpoint.
///
/// Implementations must not retry and must not time out on their own.
pub trait Transport {
    /// Send `request` and wait for the full response.
    fn send(
        &self,
        request: &ConversionRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// Side channels owned by the page hosting the widget.
pub trait Host {
    /// Show a blocking message to the user.
    fn alert(&self, message: &str);

    /// Save `bytes` as a file named `filename`.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure if the download could not
    /// be started.
    fn trigger_download(
        &self,
        bytes: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<(), String>;
}

/// Send `request` and interpret the response.
///
/// Never fails: every transport error, status, and body shape maps to
/// an outcome.
#[allow(clippy::future_not_send)] // browser transports are !Send
pub async fn convert<T: Transport>(
    transport: &T,
    request: &ConversionRequest,
) -> ConversionOutcome {
    tracing::info!(
        file = %request.file_name,
        output_format = %request.output_format,
        "submitting conversion"
    );
    match transport.send(request).await {
        Ok(response) => interpret(response, &request.output_format),
        Err(e) => {
            tracing::error!(error = %e, "conversion request failed");
            ConversionOutcome::Failed(ConversionError::Transport(e.to_string()))
        }
    }
}

/// Map a received response to an outcome.
#[must_use]
pub fn interpret(response: RawResponse, output_format: &str) -> ConversionOutcome {
    let content_type = response.content_type.as_deref().unwrap_or_default();

    if !response.is_success() {
        tracing::warn!(status = response.status, "conversion rejected");
        let message = ErrorBody::parse(&response.body)
            .ok()
            .as_ref()
            .and_then(ErrorBody::message);
        return ConversionOutcome::Failed(
            message.map_or(ConversionError::Rejected, ConversionError::Server),
        );
    }

    if is_binary_content_type(content_type) {
        let filename = download_filename(response.content_disposition.as_deref(), output_format);
        tracing::info!(%filename, bytes = response.body.len(), "conversion succeeded");
        return ConversionOutcome::Download(DownloadFile {
            filename,
            content_type: content_type.to_owned(),
            bytes: response.body,
        });
    }

    match ErrorBody::parse(&response.body).as_ref().map(ErrorBody::message) {
        Ok(Some(msg)) => ConversionOutcome::Failed(ConversionError::Server(msg)),
        Ok(None) => ConversionOutcome::Quiet,
        Err(e) => {
            tracing::error!(error = %e, content_type, "unreadable conversion response");
            ConversionOutcome::Failed(ConversionError::Transport(e.to_string()))
        }
    }
}

/// Hand an outcome to the host: download the file or alert the error.
///
/// A download that cannot be started is reported like a transport
/// failure.
pub fn deliver<H: Host + ?Sized>(outcome: ConversionOutcome, host: &H) {
    match outcome {
        ConversionOutcome::Download(file) => {
            if let Err(e) = host.trigger_download(&file.bytes, &file.filename, &file.content_type) {
                tracing::error!(error = %e, filename = %file.filename, "download failed");
                report(host, &ConversionError::Transport(e));
            }
        }
        ConversionOutcome::Quiet => {}
        ConversionOutcome::Failed(err) => report(host, &err),
    }
}

/// Tell the user why something was refused or went wrong.
///
/// Every user-facing message of the widget goes through here.
pub fn report<H: Host + ?Sized>(host: &H, problem: &dyn std::fmt::Display) {
    let message = problem.to_string();
    tracing::info!(%message, "reporting to user");
    host.alert(&message);
}
