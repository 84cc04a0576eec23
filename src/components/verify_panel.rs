//! Input row plus the verify action. Assembly failures stay local (the model
//! refocuses the empty cell and nothing is sent); network outcomes surface
//! through a blocking alert, with the error detail kept to the console.

use crate::app_lib::AppConfig;
use crate::components::{Button, OtpInput, Spinner};
use crate::features::otp::{client, model::OtpEntry, types::VerifyOtpRequest};
use leptos::prelude::*;

const SUCCESS_ALERT: &str = "OTP verified successful!";
const FAILURE_ALERT: &str = "OTP verified fail!";

#[component]
pub fn VerifyPanel() -> impl IntoView {
    let config = AppConfig::load();
    let entry = RwSignal::new(OtpEntry::new(config.code_length));

    let verify_action = Action::new_local(move |code: &String| {
        let code = code.clone();
        async move { client::verify_otp(&VerifyOtpRequest { otp_code: code }).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => notify(SUCCESS_ALERT),
                Err(err) => {
                    leptos::logging::error!("OTP verification failed: {err}");
                    notify(FAILURE_ALERT);
                }
            }
        }
    });

    let on_verify = move |_| match entry.try_update(|entry| entry.assemble()) {
        Some(Ok(code)) => {
            verify_action.dispatch(code);
        }
        Some(Err(incomplete)) => {
            leptos::logging::warn!("refusing to submit: {incomplete}");
        }
        None => {}
    };

    view! {
        <div class="space-y-6">
            <OtpInput entry=entry />
            <div class="flex flex-col items-center gap-4">
                <Button disabled=verify_action.pending() on:click=on_verify>
                    "Verify OTP"
                </Button>
                {move || verify_action.pending().get().then_some(view! { <Spinner /> })}
            </div>
        </div>
    }
}

/// Blocking alert, the widget's only user-facing notification channel.
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
