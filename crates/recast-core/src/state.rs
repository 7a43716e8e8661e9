//! Explicit UI state of the upload widget.
//!
//! [`UploadState`] owns everything the page shows: the selected file,
//! the output-format options computed for it, the chosen format, the
//! drop-zone highlight, and whether a request is in flight. Components
//! render from it and event handlers call its transition methods.

use crate::catalog::{Catalog, FormatOption};
use crate::convert::ConversionRequest;
use crate::selection::{SelectedFile, SelectionError};

/// Reasons a form submission is refused before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A previous submission has not settled yet.
    #[error("A conversion is already in progress")]
    InFlight,

    /// No file has been selected.
    #[error("Please choose a file to convert")]
    NoFile,

    /// No output format has been chosen.
    #[error("Please select an output format")]
    NoFormat,
}

/// Step of the drag-and-drop lifecycle over the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// A dragged item hovers over the zone.
    Over,
    /// The dragged item left the zone.
    Left,
    /// The item was dropped, whether or not it carried a usable file.
    Dropped,
}

/// State of one upload widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadState {
    catalog: Catalog,
    file: Option<SelectedFile>,
    bytes: Vec<u8>,
    options: Vec<FormatOption>,
    output_format: Option<String>,
    custom_filename: String,
    drag_active: bool,
    in_flight: bool,
}

impl Default for UploadState {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl UploadState {
    /// Empty widget state over `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            file: None,
            bytes: Vec::new(),
            options: vec![FormatOption::placeholder()],
            output_format: None,
            custom_filename: String::new(),
            drag_active: false,
            in_flight: false,
        }
    }

    /// The catalog options are computed from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Track the drop-zone highlight: on while hovering, off after the
    /// item leaves or is dropped.
    pub const fn drag(&mut self, phase: DragPhase) {
        self.drag_active = matches!(phase, DragPhase::Over);
    }

    /// Replace the selected file.
    ///
    /// On success the format options are rebuilt for the new extension
    /// and any previously chosen format is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if the extension is not accepted; the
    /// state is left untouched in that case.
    pub fn select_file(
        &mut self,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<&SelectedFile, SelectionError> {
        let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        let file = SelectedFile::new(name, size, &self.catalog)?;
        tracing::debug!(name, size, extension = file.extension(), "file selected");
        self.options = self.catalog.format_options(file.extension());
        self.output_format = None;
        self.bytes = bytes;
        Ok(self.file.insert(file))
    }

    /// Choose an output format by option value.
    ///
    /// Values not offered for the current file (including the
    /// placeholder) clear the choice. Returns whether a format is now
    /// chosen.
    pub fn choose_format(&mut self, value: &str) -> bool {
        self.output_format = self
            .options
            .iter()
            .find(|o| !o.is_placeholder() && o.value == value)
            .map(|o| o.value.clone());
        self.output_format.is_some()
    }

    /// Set the optional name for the converted file.
    pub fn set_custom_filename(&mut self, value: &str) {
        value.clone_into(&mut self.custom_filename);
    }

    /// Start a submission, packaging the current form.
    ///
    /// Marks the widget as in flight until [`settle`](Self::settle).
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] while a previous submission is
    /// pending, [`SubmitError::NoFile`] without a selected file, and
    /// [`SubmitError::NoFormat`] without a chosen format.
    pub fn begin_submission(&mut self) -> Result<ConversionRequest, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }
        let file = self.file.as_ref().ok_or(SubmitError::NoFile)?;
        let output_format = self.output_format.clone().ok_or(SubmitError::NoFormat)?;
        let custom = self.custom_filename.trim();
        let request = ConversionRequest {
            file_name: file.name().to_owned(),
            bytes: self.bytes.clone(),
            content_type: self.catalog.mime_type_for(file.extension()).to_owned(),
            output_format,
            custom_filename: (!custom.is_empty()).then(|| custom.to_owned()),
        };
        self.in_flight = true;
        Ok(request)
    }

    /// End the pending submission, whatever its outcome.
    pub const fn settle(&mut self) {
        self.in_flight = false;
    }

    /// The selected file, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Current options of the output-format selector.
    #[must_use]
    pub fn options(&self) -> &[FormatOption] {
        &self.options
    }

    /// The chosen output format, if any.
    #[must_use]
    pub fn output_format(&self) -> Option<&str> {
        self.output_format.as_deref()
    }

    /// The custom filename as typed.
    #[must_use]
    pub fn custom_filename(&self) -> &str {
        &self.custom_filename
    }

    /// Whether the drop zone is highlighted.
    #[must_use]
    pub const fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Whether the file-info panel is shown.
    #[must_use]
    pub const fn info_visible(&self) -> bool {
        self.file.is_some()
    }

    /// Whether the loading overlay is shown.
    #[must_use]
    pub const fn loading_visible(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        !self.in_flight && self.file.is_some() && self.output_format.is_some()
    }
}
