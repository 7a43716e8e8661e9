//! Handing converted bytes to the browser as a file download.
//!
//! The bytes go into a `Blob` with the response's content type, the
//! Blob gets a temporary object URL, and a detached `<a download>`
//! pointing at that URL is clicked once. Needs a DOM, so this only
//! does anything useful on `wasm32-unknown-unknown`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

/// A download that could not be started.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The page has no window, document, or body to work with.
    #[error("no {0} to attach the download to")]
    NoPage(&'static str),

    /// A DOM or Blob call threw.
    #[error("download rejected by the browser: {0}")]
    Browser(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Object URL for a Blob, revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_bytes(data: &[u8], content_type: &str) -> Result<Self, DownloadError> {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(data).buffer());
        let props = BlobPropertyBag::new();
        props.set_type(content_type);
        let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &props)?;
        Ok(Self(Url::create_object_url_with_blob(&blob)?))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            tracing::debug!(error = ?e, "object URL not revoked");
        }
    }
}

/// Save `data` as `filename`.
///
/// # Errors
///
/// [`DownloadError::NoPage`] outside a browser page, and
/// [`DownloadError::Browser`] when building the Blob, its URL, or the
/// anchor throws.
pub fn trigger_download(
    data: &[u8],
    filename: &str,
    content_type: &str,
) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .ok_or(DownloadError::NoPage("window"))?
        .document()
        .ok_or(DownloadError::NoPage("document"))?;
    let body = document.body().ok_or(DownloadError::NoPage("body"))?;

    let url = ObjectUrl::for_bytes(data, content_type)?;
    click_link(&document, &body, &url.0, filename)?;
    tracing::debug!(filename, bytes = data.len(), "download started");
    Ok(())
}

/// Click a short-lived `<a href download>` attached to `body`.
fn click_link(
    document: &Document,
    body: &HtmlElement,
    href: &str,
    filename: &str,
) -> Result<(), DownloadError> {
    let link: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|el| DownloadError::Browser(format!("<a> is not an anchor: {el:?}")))?;
    link.set_href(href);
    link.set_download(filename);

    body.append_child(&link)?;
    link.click();
    // The click already started the download.
    if let Err(e) = body.remove_child(&link) {
        tracing::debug!(error = ?e, "download link left in the page");
    }
    Ok(())
}
