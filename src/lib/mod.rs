//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! The widget talks to two local endpoints: `POST /verify-otp` to check an
//! assembled code and `GET /password` to fetch the currently active password.
//! Centralizing the HTTP helpers here keeps timeout and error handling
//! consistent across both calls. Callers must not log password values.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

pub use config::AppConfig;
pub use errors::AppError;

#[cfg(target_arch = "wasm32")]
pub use api::{get_json, post_json};
