use crate::prelude::*;

use crate::{
    components::svg::{ArrowLeft, DrawSvg, SvgSize::Custom},
    utils::CCStr,
};

#[component]
pub fn TextTooltip(tooltip_text: CCStr, children: Element) -> Element {
    rsx! {
        div { class: "contents", title: "{tooltip_text}", {children} }
    }
}

#[component]
pub fn Divider() -> Element {
    rsx! {
        div { class: "w-full h-px border-t border-solid border-base-content/25" }
    }
}

/// Reusable back button component for navigation
#[component]
pub fn BackButton(route: crate::Route) -> Element {
    let click_back = move |_| {
        navigator().push(route.clone());
    };

    rsx! {
        div { class: "h-full content-center",
            button {
                class: "btn btn-outline btn-primary btn-lg",
                onclick: click_back,
                DrawSvg::<ArrowLeft> { size: Custom("h-full") }
                "Back"
            }
        }
    }
}
