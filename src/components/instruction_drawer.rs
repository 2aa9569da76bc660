use crate::prelude::*;

use crate::components::{
    inputs::TextField,
    misc::Divider,
    svg::{ChevronDown, DrawSvg, SvgSize::Size5},
};

/// Open/closed state of the instructions panel. Collapsing is a pure CSS
/// transition: the content stays in the tree and only its max-height and the
/// chevron orientation change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
    pub fn chevron_class(self) -> &'static str {
        match self {
            Self::Open => "rotate-180",
            Self::Closed => "rotate-0",
        }
    }
    pub fn panel_class(self) -> &'static str {
        match self {
            Self::Open => "max-h-[500px]",
            Self::Closed => "max-h-0",
        }
    }
}

pub fn recipient_placeholder(connected: bool) -> &'static str {
    if connected {
        "Recipient address"
    } else {
        "Wallet disconnected"
    }
}

pub fn recipient_readonly(connected: bool) -> bool {
    !connected
}

const INSTRUCTION_STEPS: [&str; 4] = [
    "Enter an amount to receive a quote. You are assigned the best available rate for the \
     requested amount",
    "Optionally, provide a recipient address below to receive funds in another wallet. Submit \
     transaction to start your order",
    "Click 'Send' and complete the payment on Venmo. Ensure you have email notifications from \
     Venmo enabled",
    "Continue through to validate email proof of transaction. Submit transaction containing \
     proof to receive the requested USDC",
];

const LIQUIDITY_PROMPT: &str = "Interested in providing liquidity?";

/// Collapsible how-it-works panel of the swap screen.
///
/// The recipient field is fully controlled by the caller: it displays exactly
/// `recipient_address` and forwards raw edits through `on_recipient_change`.
/// The liquidity prompt delegates to `on_liquidity_interest` so this
/// component does not depend on the router.
#[component]
pub fn InstructionDrawer(
    recipient_address: ReadOnlySignal<Option<String>>,
    on_recipient_change: EventHandler<String>,
    connected: ReadOnlySignal<bool>,
    on_liquidity_interest: EventHandler<()>,
) -> Element {
    log::debug!("InstructionDrawer Rendered");

    let mut disclosure = use_signal(Disclosure::default);
    let display_address = use_memo(move || recipient_address().unwrap_or_default());

    let chevron_class = disclosure().chevron_class();
    let panel_class = disclosure().panel_class();

    use_drop(|| log::debug!("InstructionDrawer Dropped"));

    rsx! {
        div { class: "flex flex-col justify-center items-center px-5 rounded-2xl border border-base-content/25 bg-base-200 overflow-hidden",
            div { class: "w-full flex flex-row justify-between items-center pt-3.5 pb-3",
                div { class: "flex items-center text-sm", "Instructions" }
                button {
                    class: "cursor-pointer",
                    onclick: move |_| {
                        let next = disclosure().toggle();
                        disclosure.set(next);
                    },
                    span { class: "block transition-transform duration-[400ms] {chevron_class}",
                        DrawSvg::<ChevronDown> { size: Size5 }
                    }
                }
            }
            div { class: "w-full flex flex-col items-center gap-4 overflow-hidden transition-[max-height] duration-[400ms] ease-out {panel_class}",
                Divider {}
                div { class: "w-full flex flex-col gap-3",
                    InstructionStep { step: 1, text: INSTRUCTION_STEPS[0] }
                    InstructionStep { step: 2, text: INSTRUCTION_STEPS[1] }
                    div { class: "w-full px-5",
                        TextField {
                            label: "Recipient",
                            value: display_address,
                            placeholder: recipient_placeholder(connected()),
                            readonly: recipient_readonly(connected()),
                            oninput: move |text| on_recipient_change.call(text),
                        }
                    }
                    InstructionStep { step: 3, text: INSTRUCTION_STEPS[2] }
                    InstructionStep { step: 4, text: INSTRUCTION_STEPS[3] }
                }
                button {
                    class: "text-sm text-base-content/30 text-center pb-5 underline cursor-pointer",
                    onclick: move |_| on_liquidity_interest.call(()),
                    {LIQUIDITY_PROMPT}
                }
            }
        }
    }
}

#[component]
fn InstructionStep(step: usize, text: &'static str) -> Element {
    rsx! {
        div { class: "w-full flex flex-row items-start gap-3 px-5",
            div { class: "shrink-0 size-6 rounded-full bg-base-300 text-xs flex items-center justify-center",
                "{step}"
            }
            div { class: "text-sm text-base-content/80 text-left", {text} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_with_unrotated_chevron() {
        let d = Disclosure::default();
        assert_eq!(d, Disclosure::Closed);
        assert!(!d.is_open());
        assert_eq!(d.panel_class(), "max-h-0");
        assert_eq!(d.chevron_class(), "rotate-0");
    }

    #[test]
    fn toggling_flips_between_exactly_two_states() {
        assert_eq!(Disclosure::Closed.toggle(), Disclosure::Open);
        assert_eq!(Disclosure::Open.toggle(), Disclosure::Closed);
        assert_eq!(Disclosure::Open.panel_class(), "max-h-[500px]");
        assert_eq!(Disclosure::Open.chevron_class(), "rotate-180");
    }

    #[test]
    fn even_toggle_counts_return_to_the_initial_state() {
        let mut d = Disclosure::default();
        for n in 1..=10 {
            d = d.toggle();
            if n % 2 == 0 {
                assert_eq!(d, Disclosure::default());
            } else {
                assert_eq!(d, Disclosure::Open);
            }
        }
    }

    #[test]
    fn recipient_field_gating_follows_the_session() {
        assert_eq!(recipient_placeholder(false), "Wallet disconnected");
        assert_eq!(recipient_placeholder(true), "Recipient address");
        assert!(recipient_readonly(false));
        assert!(!recipient_readonly(true));
    }

    #[test]
    fn instructional_copy_is_static() {
        assert_eq!(INSTRUCTION_STEPS.len(), 4);
        assert!(INSTRUCTION_STEPS[0].starts_with("Enter an amount to receive a quote"));
        assert!(INSTRUCTION_STEPS[1].contains("recipient address"));
        assert!(INSTRUCTION_STEPS[2].contains("Venmo"));
        assert!(INSTRUCTION_STEPS[3].ends_with("to receive the requested USDC"));
        assert_eq!(LIQUIDITY_PROMPT, "Interested in providing liquidity?");
    }
}
