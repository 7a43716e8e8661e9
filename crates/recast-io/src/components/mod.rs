//! Dioxus UI components for the recast upload widget.
//!
//! Provides the drop zone with file picker, the selected-file panel,
//! the output-format selector, and the loading overlay.

mod file_info;
mod format_select;
mod loading;
mod upload;

pub use file_info::FileInfo;
pub use format_select::FormatSelect;
pub use loading::LoadingOverlay;
pub use upload::FileUpload;
