//! Wire formats for the Generation and Submission endpoints.

use serde::{Deserialize, Serialize};

/// Response body of the Generation Endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateWebhookResponse {
    #[serde(default)]
    pub webhook: Option<String>,
    pub access_token: String,
}

/// Request body posted to the webhook.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitSolutionRequest<'a> {
    pub final_query: &'a str,
}
