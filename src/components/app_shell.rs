//! Shared layout wrapper with a small header and content container, so
//! routes can focus on content.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-md flex items-center justify-between mx-auto p-4">
                    <A
                        href=paths::ENTRY
                        {..}
                        class="font-semibold whitespace-nowrap text-gray-900 dark:text-white"
                    >
                        "OTP Entry"
                    </A>
                    <nav class="flex items-center gap-4 text-sm font-medium text-gray-500 dark:text-gray-400">
                        <A href=paths::ENTRY {..} class="hover:text-gray-900 dark:hover:text-white">
                            "Verify"
                        </A>
                        <A href=paths::UNLOCK {..} class="hover:text-gray-900 dark:hover:text-white">
                            "Unlock"
                        </A>
                    </nav>
                </div>
            </header>
            <main class="flex-1 max-w-screen-md w-full mx-auto px-4 py-10">{children()}</main>
        </div>
    }
}
