//! Widget configuration: endpoint and multipart field names.

use serde::{Deserialize, Serialize};

/// Errors loading a [`WidgetConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON for [`WidgetConfig`].
    #[error("invalid widget configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field was present but empty.
    #[error("widget configuration field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Where and how the widget submits conversion requests.
///
/// Every field has a default, so a host page only needs to override
/// what differs, e.g. `{"endpoint": "/api/convert"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// URL the multipart form is posted to.
    pub endpoint: String,
    /// Multipart field carrying the file.
    pub file_field: String,
    /// Multipart field carrying the chosen output extension.
    pub format_field: String,
    /// Multipart field carrying the optional custom output name.
    pub custom_filename_field: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: "/convert-file".into(),
            file_field: "file".into(),
            format_field: "output_format".into(),
            custom_filename_field: "custom_filename".into(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyField`] if any field is blank.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that no field is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("endpoint", &self.endpoint),
            ("file_field", &self.file_field),
            ("format_field", &self.format_field),
            ("custom_filename_field", &self.custom_filename_field),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        Ok(())
    }
}
