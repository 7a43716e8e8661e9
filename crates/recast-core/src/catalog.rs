//! Static table of accepted input extensions and their conversion targets.
//!
//! Every extension belongs to exactly one [`FormatFamily`] in the
//! standard table, but lookups do not rely on that: an extension listed
//! under several families gets the targets of each, in family order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Group of formats that can be converted into one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatFamily {
    /// Raster images.
    Image,
    /// Text and office documents.
    Document,
    /// Audio files.
    Audio,
}

impl FormatFamily {
    /// All families in the order their options are listed.
    pub const ALL: [Self; 3] = [Self::Image, Self::Document, Self::Audio];

    /// Lowercase display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Lowercase extension without the leading dot.
    pub extension: &'static str,
    /// Family the extension converts within.
    pub family: FormatFamily,
    /// MIME type sent with an uploaded file of this extension.
    pub mime_type: &'static str,
    /// Whether a file with this extension may be uploaded.
    /// `html` is a valid output but never an input.
    pub accepted_as_input: bool,
    /// Allowed output extensions, in display order.
    pub targets: &'static [&'static str],
}

const fn entry(
    extension: &'static str,
    family: FormatFamily,
    mime_type: &'static str,
    targets: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        extension,
        family,
        mime_type,
        accepted_as_input: true,
        targets,
    }
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type for uploads whose extension is not in the catalog.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

const STANDARD_ENTRIES: &[CatalogEntry] = &[
    // Images convert to every other image format.
    entry("png", FormatFamily::Image, "image/png", &["jpg", "jpeg", "gif", "webp"]),
    entry("jpg", FormatFamily::Image, "image/jpeg", &["png", "jpeg", "gif", "webp"]),
    entry("jpeg", FormatFamily::Image, "image/jpeg", &["png", "jpg", "gif", "webp"]),
    entry("gif", FormatFamily::Image, "image/gif", &["png", "jpg", "jpeg", "webp"]),
    entry("webp", FormatFamily::Image, "image/webp", &["png", "jpg", "jpeg", "gif"]),
    // Documents.
    entry("md", FormatFamily::Document, "text/markdown", &["docx", "pdf", "html", "txt"]),
    entry("txt", FormatFamily::Document, "text/plain", &["docx", "pdf", "html", "md"]),
    entry("docx", FormatFamily::Document, DOCX_MIME, &["pdf", "html", "md", "txt"]),
    entry("pdf", FormatFamily::Document, "application/pdf", &["docx", "html", "md", "txt"]),
    CatalogEntry {
        extension: "html",
        family: FormatFamily::Document,
        mime_type: "text/html",
        accepted_as_input: false,
        targets: &["docx", "pdf", "md", "txt"],
    },
    // Audio converts to every other audio format.
    entry("wav", FormatFamily::Audio, "audio/wav", &["mp3", "ogg", "flac", "aac", "m4a"]),
    entry("mp3", FormatFamily::Audio, "audio/mpeg", &["wav", "ogg", "flac", "aac", "m4a"]),
    entry("ogg", FormatFamily::Audio, "audio/ogg", &["wav", "mp3", "flac", "aac", "m4a"]),
    entry("flac", FormatFamily::Audio, "audio/flac", &["wav", "mp3", "ogg", "aac", "m4a"]),
    entry("aac", FormatFamily::Audio, "audio/aac", &["wav", "mp3", "ogg", "flac", "m4a"]),
    entry("m4a", FormatFamily::Audio, "audio/x-m4a", &["wav", "mp3", "ogg", "flac", "aac"]),
];

/// Value of the placeholder option shown before a format is chosen.
pub const PLACEHOLDER_VALUE: &str = "";

/// Label of the placeholder option.
pub const PLACEHOLDER_LABEL: &str = "Select format...";

/// An `<option>` of the output-format selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOption {
    /// Submitted value (lowercase extension, empty for the placeholder).
    pub value: String,
    /// Displayed text (uppercase extension).
    pub label: String,
}

impl FormatOption {
    /// The "select format" option that always heads the list.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            value: PLACEHOLDER_VALUE.to_owned(),
            label: PLACEHOLDER_LABEL.to_owned(),
        }
    }

    /// Option for a target extension, labelled in uppercase.
    #[must_use]
    pub fn for_extension(extension: &str) -> Self {
        Self {
            value: extension.to_owned(),
            label: extension.to_ascii_uppercase(),
        }
    }

    /// Returns `true` for the placeholder option.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.value == PLACEHOLDER_VALUE
    }
}

/// Lookup table from input extension to allowed output extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The image/document/audio table served by the conversion endpoint.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES,
        }
    }

    /// Build a catalog over a custom table.
    #[must_use]
    pub const fn from_entries(entries: &'static [CatalogEntry]) -> Self {
        Self { entries }
    }

    /// All rows of the table.
    #[must_use]
    pub const fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Whether files with `extension` may be uploaded.
    ///
    /// `extension` must already be lowercase (see
    /// [`extension_of`](crate::selection::extension_of)).
    #[must_use]
    pub fn accepts(&self, extension: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.accepted_as_input && e.extension == extension)
    }

    /// MIME type to upload a file with `extension` as.
    #[must_use]
    pub fn mime_type_for(&self, extension: &str) -> &'static str {
        self.entries
            .iter()
            .find(|e| e.extension == extension)
            .map_or(FALLBACK_MIME_TYPE, |e| e.mime_type)
    }

    /// Families `extension` belongs to, in listing order.
    #[must_use]
    pub fn families_of(&self, extension: &str) -> Vec<FormatFamily> {
        FormatFamily::ALL
            .into_iter()
            .filter(|family| {
                self.entries
                    .iter()
                    .any(|e| e.family == *family && e.extension == extension)
            })
            .collect()
    }

    /// Output extensions for `extension`, image family first, then
    /// document, then audio. Empty for unknown extensions.
    #[must_use]
    pub fn targets_for(&self, extension: &str) -> Vec<&'static str> {
        let mut targets = Vec::new();
        for family in FormatFamily::ALL {
            for e in self
                .entries
                .iter()
                .filter(|e| e.family == family && e.extension == extension)
            {
                targets.extend(e.targets.iter().copied().filter(|t| *t != extension));
            }
        }
        targets
    }

    /// Rebuild the output-format selector for `extension`: the
    /// placeholder followed by one option per target.
    #[must_use]
    pub fn format_options(&self, extension: &str) -> Vec<FormatOption> {
        std::iter::once(FormatOption::placeholder())
            .chain(
                self.targets_for(extension)
                    .into_iter()
                    .map(FormatOption::for_extension),
            )
            .collect()
    }

    /// Accepted input extensions, in table order.
    #[must_use]
    pub fn allowed_extensions(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.accepted_as_input)
            .map(|e| e.extension)
            .collect()
    }

    /// Value for a file input's `accept` attribute, e.g. `.png,.jpg`.
    #[must_use]
    pub fn accept_attribute(&self) -> String {
        self.allowed_extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const IMAGE: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];
    const AUDIO: [&str; 6] = ["wav", "mp3", "ogg", "flac", "aac", "m4a"];

    #[test]
    fn allow_list_matches_accepted_uploads() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.allowed_extensions(),
            [
                "png", "jpg", "jpeg", "gif", "webp", "md", "txt", "docx", "pdf", "wav", "mp3",
                "ogg", "flac", "aac", "m4a"
            ]
        );
    }

    #[test]
    fn html_is_output_only() {
        let catalog = Catalog::standard();
        assert!(!catalog.accepts("html"));
        assert!(catalog.targets_for("md").contains(&"html"));
    }

    #[test]
    fn image_inputs_get_every_other_image_format_once() {
        let catalog = Catalog::standard();
        for input in IMAGE {
            let targets = catalog.targets_for(input);
            let expected: Vec<_> = IMAGE.iter().copied().filter(|f| *f != input).collect();
            assert_eq!(targets, expected, "targets for {input}");
        }
    }

    #[test]
    fn audio_inputs_get_every_other_audio_format_once() {
        let catalog = Catalog::standard();
        for input in AUDIO {
            let targets = catalog.targets_for(input);
            let expected: Vec<_> = AUDIO.iter().copied().filter(|f| *f != input).collect();
            assert_eq!(targets, expected, "targets for {input}");
        }
    }

    #[test]
    fn document_targets_follow_explicit_table() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.targets_for("md"), ["docx", "pdf", "html", "txt"]);
        assert_eq!(catalog.targets_for("txt"), ["docx", "pdf", "html", "md"]);
        assert_eq!(catalog.targets_for("docx"), ["pdf", "html", "md", "txt"]);
        assert_eq!(catalog.targets_for("pdf"), ["docx", "html", "md", "txt"]);
        assert_eq!(catalog.targets_for("html"), ["docx", "pdf", "md", "txt"]);
    }

    #[test]
    fn no_extension_targets_itself_or_repeats() {
        for e in Catalog::standard().entries() {
            assert!(
                !e.targets.contains(&e.extension),
                "{} lists itself as a target",
                e.extension
            );
            let unique: HashSet<_> = e.targets.iter().collect();
            assert_eq!(unique.len(), e.targets.len(), "{} repeats a target", e.extension);
        }
    }

    #[test]
    fn families_are_disjoint_in_standard_table() {
        let catalog = Catalog::standard();
        for e in catalog.entries() {
            assert_eq!(catalog.families_of(e.extension), [e.family]);
        }
    }

    #[test]
    fn unknown_extension_leaves_only_placeholder() {
        let options = Catalog::standard().format_options("exe");
        assert_eq!(options, [FormatOption::placeholder()]);
    }

    #[test]
    fn options_are_labelled_in_uppercase_after_placeholder() {
        let options = Catalog::standard().format_options("mp3");
        assert!(options[0].is_placeholder());
        assert_eq!(options[0].label, "Select format...");
        assert_eq!(options[1], FormatOption::for_extension("wav"));
        assert_eq!(options[1].label, "WAV");
        assert_eq!(options.len(), 6);
    }

    #[test]
    fn extension_in_several_families_gets_all_targets() {
        static SHARED: &[CatalogEntry] = &[
            CatalogEntry {
                extension: "svg",
                family: FormatFamily::Document,
                mime_type: "image/svg+xml",
                accepted_as_input: true,
                targets: &["pdf"],
            },
            CatalogEntry {
                extension: "svg",
                family: FormatFamily::Image,
                mime_type: "image/svg+xml",
                accepted_as_input: true,
                targets: &["png", "svg"],
            },
        ];
        let catalog = Catalog::from_entries(SHARED);
        // Image family is listed first regardless of table order, and
        // the self-target is dropped.
        assert_eq!(catalog.targets_for("svg"), ["png", "pdf"]);
        assert_eq!(
            catalog.families_of("svg"),
            [FormatFamily::Image, FormatFamily::Document]
        );
    }

    #[test]
    fn mime_types_match_upload_families() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.mime_type_for("jpg"), "image/jpeg");
        assert_eq!(catalog.mime_type_for("m4a"), "audio/x-m4a");
        assert_eq!(catalog.mime_type_for("md"), "text/markdown");
        assert_eq!(catalog.mime_type_for("docx"), DOCX_MIME);
        assert_eq!(catalog.mime_type_for("exe"), FALLBACK_MIME_TYPE);
        for e in catalog.entries() {
            let prefix = match e.family {
                FormatFamily::Image => "image/",
                FormatFamily::Audio => "audio/",
                FormatFamily::Document => "",
            };
            assert!(e.mime_type.starts_with(prefix), "{}", e.extension);
        }
    }

    #[test]
    fn accept_attribute_lists_dotted_extensions() {
        let attr = Catalog::standard().accept_attribute();
        assert!(attr.starts_with(".png,.jpg,"));
        assert!(attr.ends_with(",.m4a"));
        assert!(!attr.contains("html"));
    }
}
