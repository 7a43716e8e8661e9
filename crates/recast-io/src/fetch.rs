//! Conversion requests over the browser `fetch` API.
//!
//! [`FetchTransport`] posts a multipart `FormData` body to the
//! configured endpoint and reads the whole response back. Requires a
//! browser environment (`wasm32-unknown-unknown` target).

use recast_core::{ConversionRequest, RawResponse, Transport, TransportError, WidgetConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// [`Transport`] backed by `window.fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTransport {
    config: WidgetConfig,
}

impl FetchTransport {
    /// Create a transport posting to `config.endpoint`.
    #[must_use]
    pub const fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    /// Build the multipart body: the file part (with its original
    /// name), the output format, and the custom filename when set.
    fn form_data(&self, request: &ConversionRequest) -> Result<web_sys::FormData, JsValue> {
        let form = web_sys::FormData::new()?;

        let bytes = js_sys::Uint8Array::from(request.bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&bytes.buffer());
        let opts = web_sys::BlobPropertyBag::new();
        opts.set_type(&request.content_type);
        let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &opts)?;

        form.append_with_blob_and_filename(&self.config.file_field, &blob, &request.file_name)?;
        form.append_with_str(&self.config.format_field, &request.output_format)?;
        if let Some(name) = &request.custom_filename {
            form.append_with_str(&self.config.custom_filename_field, name)?;
        }
        Ok(form)
    }
}

impl Transport for FetchTransport {
    #[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
    async fn send(&self, request: &ConversionRequest) -> Result<RawResponse, TransportError> {
        let window =
            web_sys::window().ok_or_else(|| TransportError::Request("no global window".into()))?;
        let form = self
            .form_data(request)
            .map_err(|e| TransportError::Request(describe(&e)))?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);

        let promise = window.fetch_with_str_and_init(&self.config.endpoint, &init);
        let response: web_sys::Response = JsFuture::from(promise)
            .await
            .map_err(|e| TransportError::Network(describe(&e)))?
            .dyn_into()
            .map_err(|e| {
                TransportError::Network(format!("fetch did not return a Response: {e:?}"))
            })?;

        let headers = response.headers();
        let content_type = headers.get("content-type").ok().flatten();
        let content_disposition = headers.get("content-disposition").ok().flatten();

        let buffer = JsFuture::from(
            response
                .array_buffer()
                .map_err(|e| TransportError::Body(describe(&e)))?,
        )
        .await
        .map_err(|e| TransportError::Body(describe(&e)))?;
        let body = js_sys::Uint8Array::new(&buffer).to_vec();

        tracing::debug!(
            status = response.status(),
            content_type = content_type.as_deref().unwrap_or_default(),
            bytes = body.len(),
            "response received"
        );

        Ok(RawResponse {
            status: response.status(),
            content_type,
            content_disposition,
            body,
        })
    }
}

/// Human-readable text for a rejected JS promise or thrown value.
fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
