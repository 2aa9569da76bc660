use crate::prelude::*;

use crate::{
    components::{
        copy::CopyToClipboardButtonIcon, inputs::TextField,
        instruction_drawer::InstructionDrawer, modal::InfoModal,
    },
    market::{best_quote, Quote, TokenAmount},
    views::TitledView,
    Route,
};

#[component]
pub fn SwapView() -> Element {
    log::debug!("SwapView reload");

    // Externally-owned collaborators of the instruction drawer: the session
    // flag and the recipient address live here, never in the drawer.
    let mut amount_text = use_signal(String::new);
    let mut recipient_address = use_signal(|| None::<String>);
    let mut show_payment = use_signal(|| false);

    let connected = use_memo(move || state_management::SESSION.read().is_connected());

    let parsed_amount = use_memo(move || {
        let text = amount_text.read();
        if text.trim().is_empty() {
            Ok(None)
        } else {
            text.parse::<TokenAmount>().map(Some)
        }
    });
    let amount_error = use_memo(move || parsed_amount().err());

    let quote = use_memo(move || {
        let deposits = state_management::DEPOSITS.read();
        match parsed_amount() {
            Ok(Some(amount)) => best_quote(&deposits, amount),
            _ => None,
        }
    });
    let no_liquidity = use_memo(move || {
        matches!(parsed_amount(), Ok(Some(amount)) if !amount.is_zero()) && quote().is_none()
    });

    let can_send = use_memo(move || connected() && quote().is_some());

    use_drop(|| log::debug!("SwapView Dropped"));

    rsx! {
        TitledView { title: "Swap", subtitle: "Venmo payments in, USDC out",
            div { class: "max-w-xl mx-auto flex flex-col gap-4",
                div { class: "card border border-base-content/5 shadow-md",
                    div { class: "card-body",
                        TextField {
                            label: "You receive (USDC)",
                            value: amount_text,
                            placeholder: "0.00",
                            error: amount_error,
                            oninput: move |text| amount_text.set(text),
                        }
                        if let Some(quote) = quote() {
                            div { class: "flex flex-col gap-1 text-sm",
                                div { class: "flex justify-between",
                                    span { class: "text-base-content/70", "Rate" }
                                    span { "${quote.price} / USDC" }
                                }
                                div { class: "flex justify-between",
                                    span { class: "text-base-content/70", "You pay on Venmo" }
                                    span { class: "font-bold", "{quote.cost}" }
                                }
                            }
                        } else if no_liquidity() {
                            div { class: "text-sm text-warning",
                                "No deposit can fill this amount right now"
                            }
                        }
                        div { class: "card-actions justify-end items-center gap-4",
                            if !connected() {
                                div { class: "text-xs text-base-content/60",
                                    "Connect your wallet to start an order"
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                disabled: !can_send(),
                                onclick: move |_| show_payment.set(true),
                                "Send"
                            }
                        }
                    }
                }
                InstructionDrawer {
                    recipient_address,
                    on_recipient_change: move |text: String| recipient_address.set(Some(text)),
                    connected,
                    on_liquidity_interest: move |_| {
                        navigator().push(Route::DepositListView {});
                    },
                }
            }
        }
        PaymentModal {
            is_open: show_payment,
            quote,
            recipient: recipient_address,
        }
    }
}

#[component]
fn PaymentModal(
    is_open: Signal<bool>,
    quote: ReadOnlySignal<Option<Quote>>,
    recipient: ReadOnlySignal<Option<String>>,
) -> Element {
    rsx! {
        InfoModal { is_open, title: "Complete your payment",
            if let Some(quote) = quote() {
                div { class: "flex flex-col gap-3 max-w-md",
                    p { class: "text-sm",
                        "Send "
                        b { "{quote.cost}" }
                        " on Venmo to:"
                    }
                    div { class: "flex flex-row items-center gap-2 p-3 bg-base-200 rounded-lg",
                        span { class: "font-mono text-lg", "{quote.venmo_handle}" }
                        CopyToClipboardButtonIcon { value: quote.venmo_handle.clone() }
                    }
                    if let Some(recipient) = recipient().filter(|r| !r.is_empty()) {
                        p { class: "text-xs text-base-content/70",
                            "The USDC will go to "
                            span { class: "font-mono", "{recipient}" }
                        }
                    }
                    p { class: "text-xs text-base-content/70",
                        "Once the payment is sent, continue from the Venmo confirmation email to
                        claim the USDC."
                    }
                }
            }
        }
    }
}
