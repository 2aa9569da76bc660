use crate::prelude::*;

use crate::{
    components::{inputs::TextField, misc::BackButton, svg::{DrawSvg, PlusCircle}},
    market::{is_valid_venmo_handle, Deposit, TokenAmount, UsdPrice},
    utils::{timestamp_to_date_string, CCStr, CheapClone},
    views::{CreateLinkButton, TitledView},
    Route,
};

#[component]
pub fn DepositListView() -> Element {
    log::debug!("DepositListView reload");

    use_drop(|| log::debug!("DepositListView Dropped"));

    rsx! {
        TitledView { title: "Deposits", subtitle: "Provide Venmo liquidity, earn the spread",
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                for deposit in state_management::DEPOSITS().iter() {
                    DepositCard { key: "{deposit.id}", deposit: deposit.clone() }
                }
                CreateLinkButton { route: Route::DepositCreateView {}, label: "New deposit" }
            }
        }
    }
}

#[component]
fn DepositCard(deposit: CheapClone<Deposit>) -> Element {
    let since = timestamp_to_date_string(deposit.created_at.timestamp());
    rsx! {
        div { class: "card card-lg border border-base-content/5 shadow-xl",
            div { class: "card-body",
                h2 { class: "card-title font-mono", "{deposit.venmo_handle}" }
                div { class: "flex justify-between text-sm",
                    span { class: "text-base-content/70", "Available" }
                    span { class: "font-bold", "{deposit.remaining} USDC" }
                }
                div { class: "flex justify-between text-sm",
                    span { class: "text-base-content/70", "Price" }
                    span { "${deposit.price} / USDC" }
                }
                div { class: "text-xs text-base-content/60", "Since {since}" }
            }
        }
    }
}

#[component]
pub fn DepositCreateView() -> Element {
    log::debug!("DepositCreateView reload");

    let deposit_book_service = state_management::use_deposit_book_service();

    let mut handle = use_signal(String::new);
    let mut amount_text = use_signal(String::new);
    let mut price_text = use_signal(String::new);
    let mut creating = use_signal(|| false);

    let handle_error = use_memo(move || {
        let h = handle.read();
        if h.is_empty() {
            Some(CCStr::from("Venmo handle is required"))
        } else if !is_valid_venmo_handle(&h) {
            Some(CCStr::from(
                "Expected 5 to 30 letters, digits, dashes or underscores",
            ))
        } else {
            None
        }
    });

    let amount_result = use_memo(move || {
        amount_text.read().parse::<TokenAmount>().and_then(|a| {
            if a.is_zero() {
                Err(CCStr::from("Amount must be greater than zero"))
            } else {
                Ok(a)
            }
        })
    });
    let amount_error = use_memo(move || amount_result().err());

    let price_result = use_memo(move || price_text.read().parse::<UsdPrice>());
    let price_error = use_memo(move || price_result().err());

    let can_create = use_memo(move || {
        handle_error.read().is_none()
            && amount_result.read().is_ok()
            && price_result.read().is_ok()
    });

    let create_handler = move |_| async move {
        let (Ok(amount), Ok(price)) = (amount_result(), price_result()) else {
            return;
        };
        *creating.write() = true;

        let deposit = Deposit::new(handle(), amount, price);
        log::info!("create_handler - registering deposit {}", deposit.id);
        match state_management::add_deposit(deposit_book_service, deposit).await {
            Ok(()) => {
                alert_success("Deposit registered");
                navigator().push(Route::DepositListView {});
            }
            Err(e) => {
                log::error!("create_handler - {e}");
                alert_error(format!("Failed to register the deposit: {e}"));
            }
        }

        *creating.write() = false;
    };

    use_drop(|| log::debug!("DepositCreateView Dropped"));

    rsx! {
        TitledView {
            title: "New deposit",
            subtitle: "Registers Venmo liquidity for swappers",
            left: rsx! {
                BackButton { route: Route::DepositListView {} }
            },
            div { class: "max-w-xl mx-auto",
                div { class: "card border border-base-content/5 shadow-md",
                    div { class: "card-body",
                        TextField {
                            label: "Venmo handle",
                            value: handle,
                            placeholder: "@your-venmo",
                            error: handle_error,
                            oninput: move |text| handle.set(text),
                        }
                        TextField {
                            label: "Available (USDC)",
                            value: amount_text,
                            placeholder: "0.00",
                            error: amount_error,
                            oninput: move |text| amount_text.set(text),
                        }
                        TextField {
                            label: "Price (USD per USDC)",
                            value: price_text,
                            placeholder: "1.0030",
                            error: price_error,
                            oninput: move |text| price_text.set(text),
                        }
                        div { class: "card-actions justify-end",
                            button {
                                class: "btn btn-primary",
                                disabled: creating() || !can_create(),
                                onclick: create_handler,
                                if creating() {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                    "Registering..."
                                } else {
                                    DrawSvg::<PlusCircle> {}
                                    "Register"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
