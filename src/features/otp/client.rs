//! Client wrappers for the widget endpoints. These keep paths and payload
//! shapes in one place so view code never builds requests by hand.

use crate::app_lib::{AppError, get_json, post_json};
use crate::features::otp::types::{PasswordEnvelope, VerifyOtpRequest};

/// Submits an assembled code for verification. Any 2xx answer counts as
/// verified; the response body is not parsed.
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<(), AppError> {
    post_json("/verify-otp", request).await
}

/// Fetches the currently active password. Callers must not log the value.
pub async fn fetch_password() -> Result<String, AppError> {
    let envelope: PasswordEnvelope = get_json("/password").await?;
    Ok(envelope.data.password)
}
