use crate::prelude::*;

use std::collections::VecDeque;
use std::time::Duration;

use uuid::Uuid;

use crate::components::svg::{AlertCircle, Close, DrawSvg, SvgSize::Size5};
use crate::utils::CCStr;

static ALERTS: GlobalSignal<VecDeque<Alert>> = Signal::global(|| VecDeque::new());

/// Oldest alerts are evicted past this count
const MAX_ALERTS: usize = 8;
const DEFAULT_TTL_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertKind {
    Success,
    Warn,
    Error,
    Info,
}
impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Warn => "alert-warning",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }
    fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warn => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    uuid: Uuid,
    kind: AlertKind,
    message: CCStr,
    ttl_ms: u64,
}
impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<CCStr>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind,
            message: message.into(),
            ttl_ms: DEFAULT_TTL_MS,
        }
    }

    #[allow(unused)]
    pub fn with_ttl(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }
}

pub fn push_alert(alert: Alert) {
    let mut alerts = ALERTS.write();
    while alerts.len() >= MAX_ALERTS {
        alerts.pop_front();
    }
    alerts.push_back(alert);
}

pub fn alert_success(message: impl Into<CCStr>) {
    push_alert(Alert::new(AlertKind::Success, message));
}

pub fn alert_error(message: impl Into<CCStr>) {
    push_alert(Alert::new(AlertKind::Error, message));
}

pub fn alert_warn(message: impl Into<CCStr>) {
    push_alert(Alert::new(AlertKind::Warn, message));
}

pub fn alert_info(message: impl Into<CCStr>) {
    push_alert(Alert::new(AlertKind::Info, message));
}

#[component]
pub fn AlertsContainer() -> Element {
    rsx! {
        div { class: "fixed z-50 top-2 w-[90%] left-[5%] md:w-[60%] md:left-[20%] lg:w-1/2 lg:left-1/4",
            for alert in ALERTS().iter() {
                AlertDisplay { key: "{alert.uuid}", alert: alert.clone() }
            }
        }
    }
}

#[component]
fn AlertDisplay(alert: Alert) -> Element {
    log::debug!("AlertDisplay Rendered: {alert:?}");

    let kind_class = alert.kind.class();
    let kind_title = alert.kind.title();

    fn close_alert(uuid: Uuid) {
        ALERTS.write().retain(|a| a.uuid != uuid);
    }

    // Auto-dismiss countdown
    spawn(async move {
        tokio::time::sleep(Duration::from_millis(alert.ttl_ms)).await;
        log::debug!("Closing alert: {}", alert.uuid);
        close_alert(alert.uuid);
    });

    use_drop(move || log::debug!("AlertDisplay Dropped: {}", alert.uuid));

    rsx! {
        div {
            role: "alert",
            class: "alert p-1 rounded-xl mb-1 gap-1 md:gap-4 {kind_class}",
            div { class: "flex text-sm col-start-1 col-span-12 sm:col-auto",
                DrawSvg::<AlertCircle> { size: Size5 }
                b { "{kind_title}" }
            }
            span { class: "text-xs col-start-1 col-span-11 sm:col-auto", "{alert.message}" }
            button {
                class: "btn btn-circle btn-outline btn-xs col-start-12 col-span-1 sm:col-auto",
                onclick: move |_| close_alert(alert.uuid),
                DrawSvg::<Close> { size: Size5 }
            }
        }
    }
}
