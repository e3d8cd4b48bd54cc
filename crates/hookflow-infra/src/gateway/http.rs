//! HttpWebhookGateway -- concrete [`WebhookGateway`] over reqwest.
//!
//! Both calls send JSON. The generation call must succeed with a 2xx and a
//! decodable body; the submission call returns whatever status the webhook
//! answered so the runner can branch on 401 itself.
//!
//! The `Authorization` value is marked sensitive on the request and is never
//! logged.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use hookflow_core::gateway::WebhookGateway;
use hookflow_types::error::FlowError;
use hookflow_types::flow::{IdentityInput, SubmissionResult, WebhookCredential};

use super::types::{GenerateWebhookResponse, SubmitSolutionRequest};

/// reqwest-backed gateway. No timeout is configured beyond client defaults.
pub struct HttpWebhookGateway {
    client: reqwest::Client,
}

impl HttpWebhookGateway {
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

impl WebhookGateway for HttpWebhookGateway {
    async fn generate_webhook(
        &self,
        generate_url: &str,
        identity: &IdentityInput,
    ) -> Result<WebhookCredential, FlowError> {
        let response = self
            .client
            .post(generate_url)
            .json(identity)
            .send()
            .await
            .map_err(|e| FlowError::Http {
                message: format!("generate request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(FlowError::Http {
                message: format!("generate returned HTTP {status}: {error_body}"),
            });
        }

        let body: GenerateWebhookResponse = response
            .json()
            .await
            .map_err(|e| FlowError::Decode(format!("failed to parse generate response: {e}")))?;

        debug!(
            has_webhook = body.webhook.is_some(),
            "Generation endpoint issued credential"
        );

        Ok(WebhookCredential {
            webhook_url: body.webhook,
            access_token: SecretString::from(body.access_token),
        })
    }

    async fn submit(
        &self,
        webhook_url: &str,
        authorization: &SecretString,
        final_query: &str,
    ) -> Result<SubmissionResult, FlowError> {
        let mut auth_header =
            HeaderValue::from_str(authorization.expose_secret()).map_err(|_| FlowError::Http {
                message: "authorization value is not a valid header".to_string(),
            })?;
        auth_header.set_sensitive(true);

        let response = self
            .client
            .post(webhook_url)
            .header(AUTHORIZATION, auth_header)
            .json(&SubmitSolutionRequest { final_query })
            .send()
            .await
            .map_err(|e| FlowError::Http {
                message: format!("submit request failed: {e}"),
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| FlowError::Decode(format!("failed to read submit response: {e}")))?;

        Ok(SubmissionResult {
            status,
            body: parse_body(text),
        })
    }
}

/// JSON when it parses, the raw text otherwise, `null` when empty.
fn parse_body(text: String) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
}
