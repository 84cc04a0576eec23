//! Segmented one-time-password entry widget for the browser.
//!
//! The interaction logic lives in [`features::otp::model`], a plain state
//! machine with no DOM dependencies, so it compiles and tests on any target.
//! The Leptos components and network adapters are wasm-only and translate
//! browser events into model calls.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub(crate) mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
pub(crate) mod routes;
