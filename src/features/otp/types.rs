//! Request and response shapes for the verify and password endpoints.

use serde::{Deserialize, Serialize};

/// Body for `POST /verify-otp`. The server accepts the code under
/// `otp_code`; this is the single canonical field name for both pages.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyOtpRequest {
    pub otp_code: String,
}

/// Envelope for `GET /password`. The server wraps its payload in a `data`
/// object alongside status fields the widget does not read.
#[derive(Clone, Debug, Deserialize)]
pub struct PasswordEnvelope {
    pub data: PasswordData,
}

/// Password record inside the envelope. The server serializes its struct
/// fields capitalized and includes bookkeeping columns we ignore.
#[derive(Clone, Debug, Deserialize)]
pub struct PasswordData {
    #[serde(rename = "Password")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::{PasswordEnvelope, VerifyOtpRequest};

    #[test]
    fn verify_request_uses_the_canonical_field_name() {
        let request = VerifyOtpRequest {
            otp_code: "123456".to_string(),
        };
        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(encoded, r#"{"otp_code":"123456"}"#);
    }

    #[test]
    fn password_envelope_decodes_the_nested_field() {
        let envelope: PasswordEnvelope =
            serde_json::from_str(r#"{"data":{"Password":"secret"}}"#).unwrap();
        assert_eq!(envelope.data.password, "secret");
    }

    #[test]
    fn password_envelope_ignores_server_bookkeeping_fields() {
        let body = r#"{
            "statusCode": 200,
            "message": "fail",
            "data": {
                "Id": 7,
                "Password": "031337",
                "IsActive": true,
                "CreatedAt": "2024-11-02T10:00:00Z"
            }
        }"#;
        let envelope: PasswordEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.password, "031337");
    }
}
