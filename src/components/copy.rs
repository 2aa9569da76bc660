use crate::prelude::*;

use crate::{
    components::{
        misc::TextTooltip,
        svg::{ContentCopy, DrawSvg, SvgSize::Size4},
    },
    utils::CCStr,
};

#[component]
pub fn CopyToClipboardButtonIcon(value: CCStr, disabled: Option<bool>) -> Element {
    let clipboard_service = state_management::use_clipboard_service();
    rsx! {
        TextTooltip { tooltip_text: CCStr::from("Copy to clipboard"),
            button {
                class: "btn btn-circle btn-ghost btn-xs",
                onclick: move |_| {
                    state_management::copy_to_clipboard(clipboard_service, value.as_ref());
                },
                disabled,
                DrawSvg::<ContentCopy> { size: Size4 }
            }
        }
    }
}
