use crate::prelude::*;

use std::time::{Duration, Instant};

use crate::utils::CCStr;

/// A fully controlled text input: displays exactly `value` and forwards the
/// raw text of every edit through `oninput`. Owns no state of its own.
#[component]
pub fn TextField(
    label: &'static str,
    value: ReadOnlySignal<String>,
    oninput: EventHandler<String>,
    placeholder: Option<&'static str>,
    #[props(default = false)] readonly: bool,
    #[props(default = ReadOnlySignal::new(Signal::new(None)))] error: ReadOnlySignal<Option<CCStr>>,
    suffix: Option<Element>,
) -> Element {
    let (error_display, mut signal_activity, onfocusout) = use_error_feedback(error);

    rsx! {
        fieldset { class: "fieldset w-full",
            legend { class: "fieldset-legend", {label} }
            div { class: "flex flex-row gap-2 items-center",
                input {
                    r#type: "text",
                    class: "input w-full",
                    class: if error_display().is_some() { "input-error" },
                    placeholder,
                    readonly,
                    value: "{value}",
                    oninput: move |evt| {
                        signal_activity();
                        oninput.call(evt.value());
                    },
                    onfocusout,
                }
                if let Some(suffix) = suffix {
                    {suffix}
                }
            }
            div {
                class: "fieldset-label text-error",
                class: if error_display().is_none() { "invisible" },
                if let Some(e) = error_display() {
                    {e}
                } else {
                    "ph"
                }
            }
        }
    }
}

/// Defers error display until the user pauses typing (or leaves the field),
/// so a half-typed value is not flagged while it is being entered.
pub fn use_error_feedback(
    value_error: ReadOnlySignal<Option<CCStr>>,
) -> (
    Memo<Option<CCStr>>,
    impl FnMut() + Copy,
    impl FnMut(Event<FocusData>) + Copy,
) {
    use_error_feedback_with_delay(value_error, Duration::from_secs(2))
}

pub fn use_error_feedback_with_delay(
    value_error: ReadOnlySignal<Option<CCStr>>,
    delay: Duration,
) -> (
    Memo<Option<CCStr>>,
    impl FnMut() + Copy,
    impl FnMut(Event<FocusData>) + Copy,
) {
    let mut last_activity = use_signal(|| None::<Instant>);
    let mut timed_feedback = use_signal(|| false);
    let mut immediate_feedback = use_signal(|| false);
    use_future(move || async move {
        loop {
            if last_activity().is_some_and(|at| at.elapsed() > delay) {
                if !timed_feedback() {
                    *timed_feedback.write() = true;
                }
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    });

    let feedback_active = use_memo(move || timed_feedback() || immediate_feedback());
    let error_display = use_memo(move || feedback_active().then(|| value_error()).flatten());
    let signal_activity = move || {
        *last_activity.write() = Some(Instant::now());
        if immediate_feedback() {
            *immediate_feedback.write() = false;
        }
        if timed_feedback() {
            *timed_feedback.write() = false;
        }
    };
    let onfocusout = move |_| *immediate_feedback.write() = true;
    (error_display, signal_activity, onfocusout)
}
