//! OTP entry feature: the pure cell/focus model, the endpoint DTOs, and the
//! client wrappers for the verify and password endpoints.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod model;
pub mod types;
