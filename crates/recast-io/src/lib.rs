//! recast-io: Browser I/O and Dioxus component library.
//!
//! Sends conversion requests with `fetch`, saves converted files via
//! Blob downloads, shows alerts, and provides the upload widget's UI
//! components for the recast web application.

mod alert;
pub mod components;
pub mod config;
pub mod download;
pub mod fetch;
pub mod host;

pub use components::{FileInfo, FileUpload, FormatSelect, LoadingOverlay};
pub use fetch::FetchTransport;
pub use host::BrowserHost;
