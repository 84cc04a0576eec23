//! Current-password panel: fetches the password once on mount and keeps it
//! hidden until the user toggles it. Load failures are logged and leave the
//! display blank; the toggle still works, it just has nothing to show.

use crate::features::otp::client;
use leptos::prelude::*;

#[component]
pub fn PasswordReveal() -> impl IntoView {
    let password = LocalResource::new(move || async move { client::fetch_password().await });
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if let Some(Err(err)) = password.get() {
            leptos::logging::error!("failed to load current password: {err}");
        }
    });

    let display = move || {
        if !revealed.get() {
            return String::new();
        }
        match password.get() {
            Some(Ok(value)) => value,
            _ => String::new(),
        }
    };

    let toggle_label = move || {
        if revealed.get() {
            "Hide Current Password"
        } else {
            "Show Current Password"
        }
    };

    view! {
        <div class="flex flex-col items-center gap-3 rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800">
            <p class="min-h-7 font-mono text-lg tracking-widest text-gray-900 dark:text-white">
                {display}
            </p>
            <button
                type="button"
                class="text-sm font-medium text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300"
                on:click=move |_| set_revealed.update(|shown| *shown = !*shown)
            >
                {toggle_label}
            </button>
        </div>
    }
}
