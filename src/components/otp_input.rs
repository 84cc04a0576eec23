//! Segmented input row for OTP entry. This is the adapter between browser
//! events and the pure [`OtpEntry`] model: `input` and `keydown` events
//! become model calls, and the model's focus index is mirrored back onto the
//! real inputs after every change.

use crate::features::otp::model::OtpEntry;
use leptos::html;
use leptos::prelude::*;

/// Renders one single-character input per cell of `entry`.
///
/// The page owns the entry signal so it can call `assemble()` on submit;
/// this component only handles typing and focus movement.
#[component]
pub fn OtpInput(entry: RwSignal<OtpEntry>) -> impl IntoView {
    let cell_count = entry.with_untracked(OtpEntry::cell_count);
    let cell_refs: Vec<NodeRef<html::Input>> = (0..cell_count).map(|_| NodeRef::new()).collect();

    // Mirror the model's focus onto the matching input. Runs once on mount
    // (focusing cell 0) and again after every model update.
    let refs_for_focus = cell_refs.clone();
    Effect::new(move |_| {
        let focused = entry.with(|entry| entry.focus());
        if let Some(input) = refs_for_focus.get(focused).and_then(|cell_ref| cell_ref.get()) {
            let _ = input.focus();
        }
    });

    view! {
        <div class="flex justify-center gap-3">
            {cell_refs
                .into_iter()
                .enumerate()
                .map(|(index, cell_ref)| {
                    view! {
                        <input
                            node_ref=cell_ref
                            type="text"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            maxlength="1"
                            class="h-12 w-12 rounded-lg border border-gray-300 bg-gray-50 text-center text-xl font-semibold text-gray-900 focus:border-blue-500 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                            prop:value=move || entry.with(|entry| entry.value(index).to_string())
                            on:input=move |event| {
                                entry.update(|entry| entry.on_input(index, &event_target_value(&event)));
                            }
                            on:keydown=move |event| {
                                // Fires before the browser deletes anything, so
                                // the model still sees the pre-delete value.
                                if event.key() == "Backspace" {
                                    entry.update(|entry| entry.on_backspace(index));
                                }
                            }
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
