use dioxus::prelude::*;

use serde::{Deserialize, Serialize};

use super::config::{ConfigCommand, APP_CONFIG};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

pub static THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// Keeps [`THEME`] and the persisted config in sync: adopts the configured
/// theme when the config (re)loads, persists user toggles.
pub(super) fn use_theme_service(config_service: Coroutine<ConfigCommand>) {
    use_effect(move || {
        let configured = APP_CONFIG().theme;
        if *THEME.peek() != configured {
            log::debug!("theme_service - adopting configured theme {configured:?}");
            *THEME.write() = configured;
        }
    });
    use_effect(move || {
        let theme = THEME();
        if APP_CONFIG.peek().theme != theme {
            log::debug!("theme_service - persisting theme {theme:?}");
            APP_CONFIG.write().theme = theme;
            config_service.send(ConfigCommand::Persist);
        }
    });
}
