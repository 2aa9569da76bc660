use dioxus::prelude::*;

use tokio::sync::oneshot;

use crate::market::Deposit;
use crate::utils::CCStr;

use super::{
    clipboard::ClipboardCommand, deposits::DepositBookCommand, session::SessionCommand,
};

pub fn use_session_service() -> Coroutine<SessionCommand> {
    use_coroutine_handle()
}

pub fn use_clipboard_service() -> Coroutine<ClipboardCommand> {
    use_coroutine_handle()
}

pub fn use_deposit_book_service() -> Coroutine<DepositBookCommand> {
    use_coroutine_handle()
}

pub fn copy_to_clipboard(clipboard_service: Coroutine<ClipboardCommand>, s: impl Into<String>) {
    clipboard_service.send(ClipboardCommand::Copy(s.into()));
}

/// Reads the clipboard through the clipboard service. `None` when the
/// clipboard is unavailable or empty.
pub async fn paste_from_clipboard(
    clipboard_service: Coroutine<ClipboardCommand>,
) -> Option<String> {
    let (tx, rx) = oneshot::channel();
    clipboard_service.send(ClipboardCommand::Paste { result: tx });
    rx.await.ok().flatten()
}

pub fn connect_wallet(session_service: Coroutine<SessionCommand>, address: CCStr) {
    session_service.send(SessionCommand::Connect { address });
}

pub fn disconnect_wallet(session_service: Coroutine<SessionCommand>) {
    session_service.send(SessionCommand::Disconnect);
}

/// Registers a deposit in the book, reporting the persistence outcome.
pub async fn add_deposit(
    deposit_book_service: Coroutine<DepositBookCommand>,
    deposit: Deposit,
) -> Result<(), String> {
    let (tx, rx) = oneshot::channel();
    deposit_book_service.send(DepositBookCommand::Add {
        deposit,
        result: tx,
    });
    rx.await
        .map_err(|_| String::from("Deposit book service is gone"))?
}
