use dioxus::prelude::*;

use futures_util::stream::StreamExt;

use crate::market::is_valid_wallet_address;
use crate::prelude::{alert_error, alert_info, alert_success};
use crate::utils::CCStr;

use super::config::{ConfigCommand, APP_CONFIG};

/// The wallet session. Views only ever read this; mutations go through the
/// session service.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WalletSession {
    #[default]
    Disconnected,
    Connected {
        address: CCStr,
    },
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }
    pub fn address(&self) -> Option<&CCStr> {
        match self {
            Self::Connected { address } => Some(address),
            Self::Disconnected => None,
        }
    }
}

pub static SESSION: GlobalSignal<WalletSession> = Signal::global(WalletSession::default);

#[derive(Debug)]
pub enum SessionCommand {
    Connect { address: CCStr },
    Disconnect,
}

/// Session service coroutine. A successful connect remembers the address in
/// the config so the next session is one click.
pub(super) fn use_session_service(
    config_service: Coroutine<ConfigCommand>,
) -> Coroutine<SessionCommand> {
    use_coroutine(move |mut rx: UnboundedReceiver<SessionCommand>| async move {
        log::info!("session_service (coroutine) - start");

        while let Some(cmd) = rx.next().await {
            log::debug!("session_service (coroutine) - Processing command {cmd:?}...");

            match cmd {
                SessionCommand::Connect { address } => {
                    if !is_valid_wallet_address(&address) {
                        log::error!("session_service (coroutine) - invalid address {address}");
                        alert_error("Not a valid wallet address");
                        continue;
                    }
                    *SESSION.write() = WalletSession::Connected {
                        address: address.clone(),
                    };
                    if APP_CONFIG.peek().wallet_address.as_ref() != Some(&address) {
                        APP_CONFIG.write().wallet_address = Some(address);
                        config_service.send(ConfigCommand::Persist);
                    }
                    alert_success("Wallet connected");
                }
                SessionCommand::Disconnect => {
                    *SESSION.write() = WalletSession::Disconnected;
                    alert_info("Wallet disconnected");
                }
            }

            log::debug!("session_service (coroutine) - Command processed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_disconnected() {
        let session = WalletSession::default();
        assert!(!session.is_connected());
        assert!(session.address().is_none());
    }

    #[test]
    fn connected_session_exposes_its_address() {
        let session = WalletSession::Connected {
            address: CCStr::from("0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984"),
        };
        assert!(session.is_connected());
        assert_eq!(
            session.address().map(|a| a.as_ref()),
            Some("0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984")
        );
    }
}
