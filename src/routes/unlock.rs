use crate::components::{AppShell, PasswordReveal, VerifyPanel};
use leptos::prelude::*;

/// Unlock page: OTP verification plus the current-password reveal panel.
#[component]
pub fn UnlockPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-8 text-center">
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Unlock the system"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Verify your one-time password, or reveal the current one."
                    </p>
                </div>
                <VerifyPanel />
                <PasswordReveal />
            </div>
        </AppShell>
    }
}
