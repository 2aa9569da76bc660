use crate::prelude::*;

use crate::components::svg::{Close, DrawSvg};

#[component]
pub fn Modal(mut is_open: Signal<bool>, children: Element) -> Element {
    rsx! {
        input {
            r#type: "checkbox",
            name: "modal-toggle",
            class: "modal-toggle",
            tabindex: "-1",
            checked: is_open(),
        }
        div {
            class: "modal z-40",
            role: "dialog",
            onclick: move |_| {
                *is_open.write() = false;
            },
            div {
                class: "modal-box max-w-max max-h-[calc(100vh-4rem)] p-0",
                onclick: move |event| {
                    event.stop_propagation();
                },
                div { class: "p-6 w-fit", {children} }
            }
        }
    }
}

/// A modal with a title bar and a close button.
#[component]
pub fn InfoModal(mut is_open: Signal<bool>, title: &'static str, children: Element) -> Element {
    rsx! {
        Modal { is_open,
            div { class: "flex flex-row justify-between gap-4 mb-4",
                h2 { class: "text-2xl font-bold", {title} }
                button {
                    class: "btn btn-circle btn-outline btn-primary btn-sm",
                    onclick: move |_| *is_open.write() = false,
                    DrawSvg::<Close> {}
                }
            }
            {children}
        }
    }
}
