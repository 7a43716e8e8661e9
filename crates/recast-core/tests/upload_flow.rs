//! Integration test: select a file, choose a format, submit through a
//! scripted endpoint, and deliver the outcome to a recording host.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use recast_core::{
    ConversionRequest, Host, RawResponse, Transport, TransportError, UploadState, convert, deliver,
    report,
};

/// Endpoint double that records what it received.
struct ScriptedEndpoint {
    reply: Result<RawResponse, TransportError>,
    received: RefCell<Vec<ConversionRequest>>,
}

impl ScriptedEndpoint {
    fn replying(reply: Result<RawResponse, TransportError>) -> Self {
        Self {
            reply,
            received: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for ScriptedEndpoint {
    async fn send(&self, request: &ConversionRequest) -> Result<RawResponse, TransportError> {
        self.received.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}

#[derive(Default)]
struct Page {
    alerts: RefCell<Vec<String>>,
    saved: RefCell<Vec<String>>,
    downloads: Cell<usize>,
}

impl Host for Page {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn trigger_download(
        &self,
        _bytes: &[u8],
        filename: &str,
        _content_type: &str,
    ) -> Result<(), String> {
        self.saved.borrow_mut().push(filename.to_owned());
        self.downloads.set(self.downloads.get() + 1);
        Ok(())
    }
}

/// Drive one submission the way the app's submit handler does and
/// report whether the overlay was visible while the request was out.
fn submit(state: &mut UploadState, endpoint: &ScriptedEndpoint, page: &Page) -> bool {
    let request = state.begin_submission().expect("form should be complete");
    let visible_during_flight = state.loading_visible();
    let outcome = block_on(convert(endpoint, &request));
    state.settle();
    deliver(outcome, page);
    visible_during_flight
}

#[test]
fn markdown_to_pdf_downloads_named_file() {
    let mut state = UploadState::default();
    state.select_file("Notes.MD", b"# Title\n".to_vec()).unwrap();

    let values: Vec<_> = state.options().iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["", "docx", "pdf", "html", "txt"]);
    assert!(state.choose_format("pdf"));
    state.set_custom_filename("report");

    let endpoint = ScriptedEndpoint::replying(Ok(RawResponse {
        status: 200,
        content_type: Some("application/pdf".into()),
        content_disposition: Some("attachment; filename=\"report.pdf\"".into()),
        body: b"%PDF-1.7".to_vec(),
    }));
    let page = Page::default();

    assert!(submit(&mut state, &endpoint, &page));
    assert!(!state.loading_visible());

    let sent = endpoint.received.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].file_name, "Notes.MD");
    assert_eq!(sent[0].output_format, "pdf");
    assert_eq!(sent[0].custom_filename.as_deref(), Some("report"));

    assert_eq!(*page.saved.borrow(), ["report.pdf"]);
    assert!(page.alerts.borrow().is_empty());
}

#[test]
fn server_error_is_alerted_and_overlay_clears() {
    let mut state = UploadState::default();
    state.select_file("clip.wav", vec![0; 2_097_152]).unwrap();
    assert_eq!(state.file().unwrap().display_size(), "2.00 MB");
    state.choose_format("mp3");

    let endpoint = ScriptedEndpoint::replying(Ok(RawResponse {
        status: 400,
        content_type: Some("application/json".into()),
        content_disposition: None,
        body: br#"{"error":"bad format"}"#.to_vec(),
    }));
    let page = Page::default();

    assert!(submit(&mut state, &endpoint, &page));
    assert!(!state.loading_visible());
    assert_eq!(*page.alerts.borrow(), ["bad format"]);
    assert_eq!(page.downloads.get(), 0);

    // The widget is usable again after a failure.
    assert!(state.can_submit());
}

#[test]
fn network_failure_is_alerted_generically() {
    let mut state = UploadState::default();
    state.select_file("photo.webp", vec![7; 10]).unwrap();
    state.choose_format("png");

    let endpoint =
        ScriptedEndpoint::replying(Err(TransportError::Network("failed to fetch".into())));
    let page = Page::default();

    assert!(submit(&mut state, &endpoint, &page));
    assert!(!state.loading_visible());
    assert_eq!(*page.alerts.borrow(), ["An error occurred during conversion"]);
}

#[test]
fn rejected_file_never_reaches_endpoint() {
    let mut state = UploadState::default();
    let page = Page::default();
    let refused = state.select_file("index.html", b"<p>".to_vec()).unwrap_err();
    report(&page, &refused);
    assert!(!state.info_visible());

    let incomplete = state.begin_submission().unwrap_err();
    report(&page, &incomplete);
    assert!(!state.loading_visible());

    assert_eq!(
        *page.alerts.borrow(),
        [
            "Invalid file type. Please upload a supported file format.",
            "Please choose a file to convert",
        ]
    );
    assert_eq!(page.downloads.get(), 0);
}
