use crate::prelude::*;

use crate::{
    components::{
        copy::CopyToClipboardButtonIcon,
        inputs::TextField,
        misc::TextTooltip,
        modal::InfoModal,
        svg::{
            ContentPaste, DrawSvg, Moon, Sun, Wallet,
            SvgSize::{Size10, Size5},
        },
    },
    market::is_valid_wallet_address,
    utils::{truncate_address, CCStr},
    Route,
};

#[component]
pub fn MainLayout() -> Element {
    log::debug!("MainLayout reload");

    use_drop(|| log::debug!("MainLayout Dropped"));

    rsx! {
        div { class: "relative min-h-dvh",
            header { class: "bg-base-100 fixed top-0 w-full z-20 shadow-lg shadow-base-content/10",
                NavBar {}
            }
            main { class: "pt-16 pb-16 mx-8", Outlet::<Route> {} }
            footer { class: "absolute bottom-px w-full h-12 px-8 z-0",
                div { class: "h-px border-t border-solid border-gray-500" }
                Footer {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    log::debug!("NavBar reload");

    use_drop(|| log::debug!("NavBar Dropped"));

    rsx! {
        nav { class: "h-12 px-2 flex flex-row gap-2",
            div { class: "h-full flex flex-none gap-2 items-center",
                div {
                    div { class: "text-lg font-black text-nowrap", "Onramp" }
                    div { class: "text-xs text-primary italic", "Venmo to USDC" }
                }
            }
            div { class: "basis-10" }
            NavLink { route: Route::SwapView {}, "Swap" }
            NavLink { route: Route::DepositListView {}, "Deposits" }
            div { class: "grow" }
            SessionControls {}
            DarkModeToggle {}
        }
    }
}

#[component]
fn NavLink(route: Route, children: Element) -> Element {
    rsx! {
        div { class: "basis-10 content-center flex",
            Link {
                class: "h-full px-4 content-center text-lg text-nowrap font-bold uppercase hover:bg-primary/10",
                active_class: "bg-primary/10 text-primary",
                to: route,
                {children}
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        div { class: "h-full text-primary text-right content-center", "Onramp Labs" }
    }
}

/// Connect/disconnect control. The swap screen derives its session flag from
/// the connected address; the drawer only ever sees the derived boolean.
#[component]
fn SessionControls() -> Element {
    let session_service = state_management::use_session_service();

    let mut show_connect = use_signal(|| false);
    let connected_address =
        use_memo(move || state_management::SESSION.read().address().cloned());

    rsx! {
        div { class: "h-full content-center",
            if let Some(address) = connected_address() {
                div { class: "flex flex-row items-center gap-1",
                    TextTooltip { tooltip_text: address.clone(),
                        span { class: "font-mono text-sm", {truncate_address(&address)} }
                    }
                    CopyToClipboardButtonIcon { value: address.clone() }
                    button {
                        class: "btn btn-outline btn-primary btn-sm ml-2",
                        onclick: move |_| {
                            state_management::disconnect_wallet(session_service);
                        },
                        "Disconnect"
                    }
                }
            } else {
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| show_connect.set(true),
                    DrawSvg::<Wallet> { size: Size5 }
                    "Connect"
                }
            }
        }
        ConnectWalletModal { is_open: show_connect }
    }
}

#[component]
fn ConnectWalletModal(mut is_open: Signal<bool>) -> Element {
    let session_service = state_management::use_session_service();
    let clipboard_service = state_management::use_clipboard_service();

    let mut address = use_signal(String::new);

    // Prefill with the remembered address each time the dialog opens
    use_effect(move || {
        if is_open() {
            if let Some(remembered) = state_management::APP_CONFIG.peek().wallet_address.clone() {
                address.set(remembered.to_string());
            }
        }
    });

    let address_error = use_memo(move || {
        let a = address.read();
        if a.is_empty() {
            Some(CCStr::from("Address is required"))
        } else if !is_valid_wallet_address(&a) {
            Some(CCStr::from("Expected 0x followed by 40 hex digits"))
        } else {
            None
        }
    });
    let can_connect = use_memo(move || address_error.read().is_none());

    rsx! {
        InfoModal { is_open, title: "Connect wallet",
            div { class: "flex flex-col gap-2 w-96",
                div { class: "text-sm text-base-content/70",
                    "Orders and liquidity are tied to the wallet that receives the USDC."
                }
                TextField {
                    label: "Wallet address",
                    value: address,
                    placeholder: "0x…",
                    error: address_error,
                    oninput: move |text| address.set(text),
                    suffix: rsx! {
                        TextTooltip { tooltip_text: CCStr::from("Paste"),
                            button {
                                class: "btn btn-square btn-ghost btn-sm",
                                onclick: move |_| async move {
                                    if let Some(text) =
                                        state_management::paste_from_clipboard(clipboard_service)
                                            .await
                                    {
                                        address.set(text.trim().to_owned());
                                    }
                                },
                                DrawSvg::<ContentPaste> { size: Size5 }
                            }
                        }
                    },
                }
                div { class: "flex justify-end",
                    button {
                        class: "btn btn-primary",
                        disabled: !can_connect(),
                        onclick: move |_| {
                            state_management::connect_wallet(
                                session_service,
                                CCStr::from(address()),
                            );
                            is_open.set(false);
                        },
                        DrawSvg::<Wallet> {}
                        "Connect"
                    }
                }
            }
        }
    }
}

#[component]
fn DarkModeToggle() -> Element {
    rsx! {
        input {
            r#type: "checkbox",
            name: "theme",
            class: "theme-controller hidden",
            value: match state_management::THEME() {
                Theme::Light => "light",
                Theme::Dark => "dark",
            },
            tabindex: "-1",
            checked: true,
        }
        label { class: "swap swap-rotate",
            input {
                r#type: "checkbox",
                name: "theme",
                tabindex: "-1",
                oninput: move |event| {
                    *state_management::THEME.write() = match event.checked() {
                        true => Theme::Dark,
                        false => Theme::Light,
                    };
                },
                checked: matches!(state_management::THEME(), Theme::Dark),
            }
            DrawSvg::<Sun> { base_class: "swap-off fill-current", size: Size10 }
            DrawSvg::<Moon> { base_class: "swap-on fill-current", size: Size10 }
        }
    }
}
