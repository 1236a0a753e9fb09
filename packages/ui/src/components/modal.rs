use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `on_close`; clicks inside the card do not.
#[component]
pub fn ModalOverlay(
    #[props(default)] title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                if !title.is_empty() {
                    div { class: "modal-header",
                        h2 { class: "modal-title", "{title}" }
                        button {
                            class: "modal-close",
                            title: "Close",
                            onclick: move |_| on_close.call(()),
                            Icon { icon: FaXmark, width: 14, height: 14 }
                        }
                    }
                }
                {children}
            }
        }
    }
}
