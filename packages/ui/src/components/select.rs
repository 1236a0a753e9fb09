use dioxus::prelude::*;

/// A native `<select>` over `(value, label)` pairs, with an optional empty
/// placeholder option first.
#[component]
pub fn Select(
    #[props(default)] id: String,
    value: String,
    options: Vec<(String, String)>,
    placeholder: Option<String>,
    #[props(default)] required: bool,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "select",
            required,
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            if let Some(placeholder) = placeholder {
                option { value: "", "{placeholder}" }
            }
            for (v, label) in options {
                option {
                    key: "{v}",
                    value: "{v}",
                    selected: v == value,
                    "{label}"
                }
            }
        }
    }
}
