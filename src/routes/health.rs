//! Health page: build and configuration facts for a deployed widget, so an
//! operator can tell at a glance which build is live and where it points.

use crate::app_lib::{AppConfig, build_info};
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let config = AppConfig::load();

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto rounded-lg border border-gray-200 bg-white dark:border-gray-700 dark:bg-gray-800">
                <div class="border-b border-gray-200 px-6 py-3 font-semibold text-gray-900 dark:border-gray-700 dark:text-white">
                    "About this widget"
                </div>
                <dl class="divide-y divide-gray-200 px-6 text-sm dark:divide-gray-700">
                    <HealthRow label="Version" value=build_info::version() />
                    <HealthRow label="Commit" value=build_info::git_commit_hash() />
                    <HealthRow label="Code length" value=config.code_length.to_string() />
                    <HealthRow label="API base" value=config.api_base_url />
                </dl>
            </div>
        </AppShell>
    }
}

#[component]
fn HealthRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between gap-6 py-3">
            <dt class="text-gray-500 dark:text-gray-400">{label}</dt>
            <dd class="font-mono text-gray-900 dark:text-white">{value}</dd>
        </div>
    }
}
