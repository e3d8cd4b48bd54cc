//! WebhookGateway trait definition.
//!
//! The two outbound HTTP calls of a flow: asking the Generation Endpoint for
//! a webhook, and posting the final query to it. Implementations live in
//! hookflow-infra (e.g., `HttpWebhookGateway`).

use secrecy::SecretString;

use hookflow_types::error::FlowError;
use hookflow_types::flow::{IdentityInput, SubmissionResult, WebhookCredential};

/// Remote side of the flow.
///
/// `submit` hands back every HTTP response, 401 included, as a
/// [`SubmissionResult`]. Only transport and decoding failures are errors, so
/// the caller decides what a status code means.
pub trait WebhookGateway: Send + Sync {
    /// POST the identity to `generate_url` and decode the issued credential.
    fn generate_webhook(
        &self,
        generate_url: &str,
        identity: &IdentityInput,
    ) -> impl std::future::Future<Output = Result<WebhookCredential, FlowError>> + Send;

    /// POST `{"finalQuery": final_query}` to `webhook_url` with the given
    /// `Authorization` header value.
    fn submit(
        &self,
        webhook_url: &str,
        authorization: &SecretString,
        final_query: &str,
    ) -> impl std::future::Future<Output = Result<SubmissionResult, FlowError>> + Send;
}
