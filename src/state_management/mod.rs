mod clipboard;
mod config;
mod deposits;
mod helpers;
mod session;
mod theme;

pub fn use_init_services() {
    log::debug!("init_services - start");
    let config_service = config::use_config_service();
    let _ = session::use_session_service(config_service);
    theme::use_theme_service(config_service);
    let _ = clipboard::use_clipboard_service();
    let _ = deposits::use_deposit_book_service();
    log::debug!("init_services - finished");
}

pub mod prelude {
    pub use super::config::AppConfig;
    pub use super::session::WalletSession;
    pub use super::theme::Theme;

    pub mod state_management {
        pub use super::super::config::APP_CONFIG;
        pub use super::super::deposits::DEPOSITS;
        pub use super::super::helpers::*;
        pub use super::super::session::SESSION;
        pub use super::super::theme::THEME;
    }
}
