//! Flow domain types.
//!
//! `IdentityInput` goes out to the Generation Endpoint, `WebhookCredential`
//! comes back, `PayloadChoice` picks one of the two bundled queries, and
//! `SubmissionResult` is whatever the webhook answered.

use std::fmt;
use std::path::PathBuf;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Identity fields sent to the Generation Endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInput {
    pub name: String,
    #[serde(rename = "regNo")]
    pub registration_id: String,
    pub email: String,
}

impl IdentityInput {
    pub fn new(
        name: impl Into<String>,
        registration_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            registration_id: registration_id.into(),
            email: email.into(),
        }
    }
}

/// Webhook URL and access token issued for one flow execution.
///
/// The token is a [`SecretString`] and renders as `[REDACTED]` in `Debug`.
#[derive(Debug)]
pub struct WebhookCredential {
    /// Absent when the Generation Endpoint did not return one.
    pub webhook_url: Option<String>,
    pub access_token: SecretString,
}

impl WebhookCredential {
    /// The webhook URL, or `fallback` verbatim when none was issued.
    pub fn resolve_url<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.webhook_url.as_deref().unwrap_or(fallback)
    }
}

/// Which of the two static payloads a registration id maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadChoice {
    /// Odd trailing digits.
    A,
    /// Even trailing digits.
    B,
}

impl PayloadChoice {
    /// Logical resource name of the payload.
    pub fn resource(&self) -> &'static str {
        match self {
            PayloadChoice::A => "sql/q1.sql",
            PayloadChoice::B => "sql/q2.sql",
        }
    }
}

impl fmt::Display for PayloadChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadChoice::A => write!(f, "A"),
            PayloadChoice::B => write!(f, "B"),
        }
    }
}

/// Status and body returned by the Submission Endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: u16,
    /// Parsed JSON, or the raw text as a JSON string when it was not JSON.
    pub body: serde_json::Value,
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Summary of a completed flow.
#[derive(Debug, Clone, Serialize)]
pub struct FlowReport {
    pub webhook_url: String,
    pub choice: PayloadChoice,
    pub output_path: PathBuf,
    pub retried: bool,
    pub submission: SubmissionResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_serializes_reg_no() {
        let identity = IdentityInput::new("Jane", "PES1202300001", "jane@example.com");
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["name"], "Jane");
        assert_eq!(json["regNo"], "PES1202300001");
        assert_eq!(json["email"], "jane@example.com");
        assert!(json.get("registration_id").is_none());
    }

    #[test]
    fn test_credential_debug_hides_token() {
        let cred = WebhookCredential {
            webhook_url: None,
            access_token: SecretString::from("tok-very-secret".to_string()),
        };
        let debug = format!("{cred:?}");
        assert!(!debug.contains("tok-very-secret"));
    }

    #[test]
    fn test_resolve_url_prefers_issued_webhook() {
        let cred = WebhookCredential {
            webhook_url: Some("https://issued.example/hook".to_string()),
            access_token: SecretString::from("t".to_string()),
        };
        assert_eq!(cred.resolve_url("https://fallback"), "https://issued.example/hook");

        let cred = WebhookCredential {
            webhook_url: None,
            access_token: SecretString::from("t".to_string()),
        };
        assert_eq!(cred.resolve_url("https://fallback"), "https://fallback");
    }

    #[test]
    fn test_payload_choice_resources() {
        assert_eq!(PayloadChoice::A.resource(), "sql/q1.sql");
        assert_eq!(PayloadChoice::B.resource(), "sql/q2.sql");
        assert_eq!(PayloadChoice::B.to_string(), "B");
        assert_eq!(serde_json::to_value(PayloadChoice::A).unwrap(), "A");
    }

    #[test]
    fn test_submission_status_helpers() {
        let ok = SubmissionResult {
            status: 200,
            body: serde_json::json!({"success": true}),
        };
        assert!(ok.is_success());
        assert!(!ok.is_unauthorized());

        let denied = SubmissionResult {
            status: 401,
            body: serde_json::Value::Null,
        };
        assert!(!denied.is_success());
        assert!(denied.is_unauthorized());
    }
}
