//! The page's download and alert side channels as a [`Host`].

use recast_core::Host;

use crate::{alert, download};

/// [`Host`] that alerts with `window.alert` and downloads via Blob URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn alert(&self, message: &str) {
        alert::show(message);
    }

    fn trigger_download(
        &self,
        bytes: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<(), String> {
        download::trigger_download(bytes, filename, content_type).map_err(|e| e.to_string())
    }
}
