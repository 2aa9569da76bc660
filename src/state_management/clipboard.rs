use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use tokio::sync::oneshot;

use crate::prelude::{alert_error, alert_info, alert_warn};

#[derive(Debug)]
pub enum ClipboardCommand {
    Copy(String),
    Paste {
        result: oneshot::Sender<Option<String>>,
    },
}

pub(super) fn use_clipboard_service() -> Coroutine<ClipboardCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<ClipboardCommand>| async move {
            log::info!("clipboard_service (coroutine) - start");

            let mut clipboard = match arboard::Clipboard::new() {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("Clipboard service failed to init: {e}");
                    alert_warn("Failed to initialize Clipboard!");
                    None
                }
            };

            while let Some(cmd) = rx.next().await {
                log::debug!("clipboard_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    ClipboardCommand::Copy(text) => match clipboard.as_mut() {
                        Some(clipboard) => match clipboard.set_text(text) {
                            Ok(_) => alert_info("Copied to Clipboard!"),
                            Err(_) => alert_error("Failed to copy to Clipboard!"),
                        },
                        None => {
                            alert_error("No Clipboard service!");
                        }
                    },
                    ClipboardCommand::Paste { result } => {
                        let text = clipboard.as_mut().and_then(|clipboard| {
                            clipboard
                                .get_text()
                                .map_err(|e| log::debug!("Clipboard read failed: {e}"))
                                .ok()
                        });
                        let _ = result.send(text);
                    }
                }
                log::debug!("clipboard_service (coroutine) - Command processed");
            }
        },
    )
}
