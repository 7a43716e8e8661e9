use dioxus::prelude::*;
use recast_core::{DragPhase, SubmitError, UploadState, convert, deliver, report};
use recast_io::{BrowserHost, FetchTransport, FileInfo, FileUpload, FormatSelect, LoadingOverlay};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the widget's [`UploadState`] in a single signal and wires the
/// drop zone, file info panel, format selector, and loading overlay to
/// its transitions.
fn app() -> Element {
    // --- Application state ---
    let mut state = use_signal(UploadState::default);
    let transport = use_hook(|| FetchTransport::new(recast_io::config::load()));

    // --- Drop zone handlers ---
    let on_drag = move |phase: DragPhase| state.write().drag(phase);

    let on_file = move |(name, bytes): (String, Vec<u8>)| {
        let result = state.write().select_file(&name, bytes).map(|_| ());
        if let Err(e) = result {
            report(&BrowserHost, &e);
        }
    };

    let on_reject = move |message: String| report(&BrowserHost, &message);

    // --- Submission ---
    // The overlay stays up from `begin_submission` until the request
    // settles; a second submit in between is refused by the state.
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let begun = state.write().begin_submission();
        let request = match begun {
            Ok(request) => request,
            Err(SubmitError::InFlight) => {
                tracing::debug!("submit ignored while a conversion is in flight");
                return;
            }
            Err(e) => {
                report(&BrowserHost, &e);
                return;
            }
        };
        let transport = transport.clone();
        spawn(async move {
            let outcome = convert(&transport, &request).await;
            state.write().settle();
            deliver(outcome, &BrowserHost);
        });
    };

    // --- Render snapshot ---
    let catalog = *state.read().catalog();
    let drag_active = state.read().drag_active();
    let file = state.read().file().cloned();
    let options = state.read().options().to_vec();
    let selected = state.read().output_format().map(str::to_owned);
    let custom_filename = state.read().custom_filename().to_owned();
    let loading = state.read().loading_visible();
    let can_submit = state.read().can_submit();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { "recast" }
                p { class: "muted", "Convert images, documents, and audio files" }
            }

            form { id: "convertForm", class: "convert-form", onsubmit: on_submit,
                FileUpload {
                    catalog: catalog,
                    drag_active: drag_active,
                    on_drag: on_drag,
                    on_file: on_file,
                    on_reject: on_reject,
                }

                FileInfo { file: file }

                label { r#for: "outputFormat", "Convert to" }
                FormatSelect {
                    options: options,
                    selected: selected,
                    disabled: loading,
                    on_change: move |value: String| {
                        state.write().choose_format(&value);
                    },
                }

                label { r#for: "customFilename", "Output name (optional)" }
                input {
                    id: "customFilename",
                    name: "custom_filename",
                    r#type: "text",
                    class: "form-input",
                    placeholder: "Defaults to the original name",
                    value: "{custom_filename}",
                    disabled: loading,
                    oninput: move |evt: FormEvent| state.write().set_custom_filename(&evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: !can_submit,
                    "Convert"
                }
            }

            LoadingOverlay { visible: loading }
        }
    }
}
