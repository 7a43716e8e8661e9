//! recast-core: Upload widget logic without a browser (sans-IO).
//!
//! Covers everything the conversion widget decides on its own:
//! which extensions are accepted, which output formats each input may
//! be converted to, the widget's UI state, and how a server response
//! turns into a download or an error message.
//!
//! This crate has **no browser dependencies** -- network access, file
//! downloads, and alerts are reached through the [`Transport`] and
//! [`Host`] traits. The browser implementations live in `recast-io`.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod response;
pub mod selection;
pub mod state;

pub use catalog::{Catalog, CatalogEntry, FormatFamily, FormatOption};
pub use config::{ConfigError, WidgetConfig};
pub use convert::{
    ConversionRequest, Host, RawResponse, Transport, TransportError, convert, deliver, report,
};
pub use response::{ConversionError, ConversionOutcome, DownloadFile};
pub use selection::{SelectedFile, SelectionError, check_name, extension_of};
pub use state::{DragPhase, SubmitError, UploadState};
