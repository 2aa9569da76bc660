use std::path::PathBuf;

use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use tokio::sync::oneshot;

use crate::market::Deposit;
use crate::utils::{log_error, CheapClone};

/// The local deposit book, ordered oldest first. The quote engine of the swap
/// screen matches requests against this.
pub static DEPOSITS: GlobalSignal<Vec<CheapClone<Deposit>>> = Signal::global(Vec::new);

fn deposits_file_path() -> PathBuf {
    let mut path = dirs_next::config_dir().unwrap_or_default();
    path.push("onramp-gui");
    path.push("deposits.json");
    path
}

#[derive(Debug)]
pub enum DepositBookCommand {
    Add {
        deposit: Deposit,
        result: oneshot::Sender<Result<(), String>>,
    },
    Reload,
}

/// Deposit book service coroutine: loads `deposits.json` at startup and keeps
/// it in sync with [`DEPOSITS`].
pub(super) fn use_deposit_book_service() -> Coroutine<DepositBookCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<DepositBookCommand>| async move {
            log::info!("deposit_book_service (coroutine) - start");

            *DEPOSITS.write() = load_deposits();

            while let Some(cmd) = rx.next().await {
                log::debug!("deposit_book_service (coroutine) - Processing command {cmd:?}...");

                match cmd {
                    DepositBookCommand::Add { deposit, result } => {
                        let mut book = DEPOSITS.cloned();
                        book.push(CheapClone::new(deposit));
                        let op_result = save_deposits(&book);
                        if op_result.is_ok() {
                            *DEPOSITS.write() = book;
                        }
                        let _ = result.send(op_result);
                    }
                    DepositBookCommand::Reload => {
                        *DEPOSITS.write() = load_deposits();
                    }
                }

                log::debug!("deposit_book_service (coroutine) - Command processed");
            }
        },
    )
}

fn load_deposits() -> Vec<CheapClone<Deposit>> {
    let path = deposits_file_path();
    let mut deposits: Vec<CheapClone<Deposit>> = match std::fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Invalid deposits file {}: {e}", path.display());
            Vec::new()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            log::warn!("Cannot read deposits file {}: {e}", path.display());
            Vec::new()
        }
    };
    deposits.sort_by_key(|d| d.created_at);
    deposits
}

fn save_deposits(deposits: &[CheapClone<Deposit>]) -> Result<(), String> {
    let path = deposits_file_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(log_error)?;
    }
    let raw = serde_json::to_string_pretty(deposits).map_err(log_error)?;
    std::fs::write(&path, raw).map_err(log_error)
}
