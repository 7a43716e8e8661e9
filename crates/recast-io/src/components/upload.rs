//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use recast_core::{Catalog, DragPhase, check_name};

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Catalog deciding which extensions are accepted.
    catalog: Catalog,
    /// Whether a dragged item currently hovers over the zone.
    drag_active: bool,
    /// Called for each step of the drag lifecycle.
    on_drag: EventHandler<DragPhase>,
    /// Called with `(filename, bytes)` for an accepted file.
    on_file: EventHandler<(String, Vec<u8>)>,
    /// Called with the message for a refused or unreadable file.
    on_reject: EventHandler<String>,
}

/// A drop zone with a file picker button.
///
/// Only the first file of a selection or drop is used. Its extension
/// is checked before the contents are read; a refused file goes to
/// `on_reject` and `on_file` is not called.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let catalog = props.catalog;

    // Shared by the picker and drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        if let Err(e) = check_name(&name, &catalog) {
            tracing::info!(%name, "refused file");
            props.on_reject.call(e.to_string());
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => props.on_file.call((name, bytes.to_vec())),
            Err(e) => {
                tracing::error!(%name, error = %e, "failed to read file");
                props.on_reject.call(format!("Failed to read file: {e}"));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        props.on_drag.call(DragPhase::Dropped);
        process_files(evt.files()).await;
    };

    let zone_class = if props.drag_active {
        "drop-zone dragover"
    } else {
        "drop-zone"
    };
    let accept = catalog.accept_attribute();

    rsx! {
        div {
            id: "dropZone",
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                props.on_drag.call(DragPhase::Over);
            },
            ondragleave: move |_| {
                props.on_drag.call(DragPhase::Left);
            },
            ondrop: handle_drop,

            p { class: "drop-hint", "Drop a file here or " }

            label { class: "btn btn-secondary",
                input {
                    id: "fileInput",
                    r#type: "file",
                    name: "file",
                    accept: "{accept}",
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "drop-formats", "Images, documents (MD, TXT, DOCX, PDF), and audio" }
        }
    }
}
