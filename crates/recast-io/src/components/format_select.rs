//! Output-format selector.

use dioxus::prelude::*;
use recast_core::FormatOption;

/// Props for the [`FormatSelect`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FormatSelectProps {
    /// Options to show, placeholder first.
    options: Vec<FormatOption>,
    /// Value of the chosen option, if any.
    selected: Option<String>,
    /// Disables the selector, e.g. while a request is in flight.
    #[props(default)]
    disabled: bool,
    /// Called with the value of the newly chosen option.
    on_change: EventHandler<String>,
}

/// A `<select>` rebuilt from the options computed for the current file.
#[component]
pub fn FormatSelect(props: FormatSelectProps) -> Element {
    let selected = props.selected.unwrap_or_default();
    let rows: Vec<_> = props
        .options
        .into_iter()
        .map(|o| {
            let is_selected = o.value == selected;
            (o.value, o.label, is_selected)
        })
        .collect();

    rsx! {
        select {
            id: "outputFormat",
            name: "output_format",
            class: "form-select",
            required: true,
            disabled: props.disabled,
            value: "{selected}",
            onchange: move |evt: FormEvent| props.on_change.call(evt.value()),
            for (value, label, is_selected) in rows {
                option {
                    key: "{value}",
                    value: "{value}",
                    selected: is_selected,
                    "{label}"
                }
            }
        }
    }
}
