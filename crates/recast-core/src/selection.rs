//! File selection: extension extraction and allow-list validation.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Bytes per binary megabyte.
const BYTES_PER_MB: f64 = 1_048_576.0;

/// Message shown when a file with an unsupported extension is picked.
pub const INVALID_FILE_MESSAGE: &str =
    "Invalid file type. Please upload a supported file format.";

/// Reasons a picked or dropped file is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The extension is not in the catalog's allow-list.
    #[error("Invalid file type. Please upload a supported file format.")]
    UnsupportedExtension {
        /// Name of the refused file.
        name: String,
        /// Extension as extracted from `name`.
        extension: String,
    },
}

/// Extract the lowercase extension of `name`.
///
/// Takes everything after the last `.`. A name without a `.` yields
/// the whole name (lowercased), which never matches the allow-list, so
/// `README` is refused rather than treated as extension-less.
#[must_use]
pub fn extension_of(name: &str) -> String {
    name.rsplit('.')
        .next()
        .unwrap_or(name)
        .to_ascii_lowercase()
}

/// Metadata of the file currently selected in the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    name: String,
    size: u64,
    extension: String,
}

impl SelectedFile {
    /// Validate a picked file against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnsupportedExtension`] if the extension
    /// of `name` is not accepted as input.
    pub fn new(name: &str, size: u64, catalog: &Catalog) -> Result<Self, SelectionError> {
        let extension = check_name(name, catalog)?;
        Ok(Self {
            name: name.to_owned(),
            size,
            extension,
        })
    }

    /// Original filename.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Lowercase extension.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Size in binary megabytes with two decimals, e.g. `"2.00 MB"`.
    #[must_use]
    pub fn display_size(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let mb = self.size as f64 / BYTES_PER_MB;
        format!("{mb:.2} MB")
    }
}

/// Check only the name of a file, before its contents are read.
///
/// Returns the extracted extension on success.
///
/// # Errors
///
/// Returns [`SelectionError::UnsupportedExtension`] if the extension is
/// not accepted as input.
pub fn check_name(name: &str, catalog: &Catalog) -> Result<String, SelectionError> {
    let extension = extension_of(name);
    if catalog.accepts(&extension) {
        Ok(extension)
    } else {
        Err(SelectionError::UnsupportedExtension {
            name: name.to_owned(),
            extension,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_text_after_last_dot_lowercased() {
        assert_eq!(extension_of("photo.PNG"), "png");
        assert_eq!(extension_of("archive.tar.MP3"), "mp3");
        assert_eq!(extension_of("notes.md"), "md");
    }

    #[test]
    fn name_without_dot_is_its_own_extension() {
        assert_eq!(extension_of("README"), "readme");
        let err = SelectedFile::new("README", 10, &Catalog::standard()).unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnsupportedExtension {
                name: "README".into(),
                extension: "readme".into(),
            }
        );
    }

    #[test]
    fn trailing_dot_gives_empty_extension() {
        assert_eq!(extension_of("file."), "");
        assert!(SelectedFile::new("file.", 1, &Catalog::standard()).is_err());
    }

    #[test]
    fn every_allowed_extension_is_accepted() {
        let catalog = Catalog::standard();
        for ext in catalog.allowed_extensions() {
            let name = format!("upload.{}", ext.to_ascii_uppercase());
            let file = SelectedFile::new(&name, 1, &catalog).unwrap();
            assert_eq!(file.extension(), ext);
        }
    }

    #[test]
    fn unsupported_extensions_are_refused() {
        let catalog = Catalog::standard();
        for name in ["page.html", "setup.exe", "clip.mp4", "sheet.xlsx"] {
            assert!(SelectedFile::new(name, 1, &catalog).is_err(), "{name}");
        }
    }

    #[test]
    fn error_message_is_user_facing() {
        let err = check_name("x.exe", &Catalog::standard()).unwrap_err();
        assert_eq!(err.to_string(), INVALID_FILE_MESSAGE);
    }

    #[test]
    fn size_displays_binary_megabytes() {
        let catalog = Catalog::standard();
        let file = SelectedFile::new("a.png", 2_097_152, &catalog).unwrap();
        assert_eq!(file.display_size(), "2.00 MB");
        let file = SelectedFile::new("a.png", 0, &catalog).unwrap();
        assert_eq!(file.display_size(), "0.00 MB");
        let file = SelectedFile::new("a.png", 1_572_864, &catalog).unwrap();
        assert_eq!(file.display_size(), "1.50 MB");
    }
}
