//! Panel showing the selected file's name and size.

use dioxus::prelude::*;
use recast_core::SelectedFile;

/// Name and size of the selected file; hidden until one is selected.
#[component]
pub fn FileInfo(file: Option<SelectedFile>) -> Element {
    let class = if file.is_some() { "file-info" } else { "file-info d-none" };
    let (name, size) = file
        .as_ref()
        .map(|f| (f.name().to_owned(), f.display_size()))
        .unwrap_or_default();

    rsx! {
        div { id: "fileInfo", class: "{class}",
            span { id: "fileName", class: "file-name", "{name}" }
            span { id: "fileSize", class: "file-size", "{size}" }
        }
    }
}
