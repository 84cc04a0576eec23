use crate::components::{AppShell, VerifyPanel};
use leptos::prelude::*;

/// OTP verification page: segmented input plus the verify action.
#[component]
pub fn OtpEntryPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-8 text-center">
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Enter your code"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Type the one-time password from your email."
                    </p>
                </div>
                <VerifyPanel />
            </div>
        </AppShell>
    }
}
