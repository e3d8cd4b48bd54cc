//! FlowRunner -- drives one end-to-end execution.
//!
//! generate webhook -> select payload -> persist locally -> submit, with a
//! single Bearer retry when the webhook answers 401 and no prefix was
//! configured.
//!
//! `execute` surfaces failures as [`FlowError`]; `run_flow` is the
//! fire-and-forget entry point that contains and logs them.

use secrecy::SecretString;
use tracing::{Instrument, error, info, info_span, warn};

use hookflow_types::config::FlowConfig;
use hookflow_types::error::FlowError;
use hookflow_types::flow::{FlowReport, IdentityInput, SubmissionResult};

use crate::auth::{BEARER_PREFIX, authorization_value};
use crate::gateway::WebhookGateway;
use crate::payload::{PayloadSource, load_payload, select_payload};
use crate::service::fs::FileSystem;

/// Runs the webhook flow against a gateway, a payload source and a filesystem.
///
/// Generic over the three ports so tests can swap in in-memory fakes.
pub struct FlowRunner<G: WebhookGateway, P: PayloadSource, F: FileSystem> {
    gateway: G,
    payloads: P,
    fs: F,
    config: FlowConfig,
}

impl<G: WebhookGateway, P: PayloadSource, F: FileSystem> FlowRunner<G, P, F> {
    pub fn new(gateway: G, payloads: P, fs: F, config: FlowConfig) -> Self {
        Self {
            gateway,
            payloads,
            fs,
            config,
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Run the flow and log the outcome. Never fails.
    pub async fn run_flow(&self, name: &str, registration_id: &str, email: &str) {
        let identity = IdentityInput::new(name, registration_id, email);

        match self.execute(&identity).await {
            Ok(report) => {
                info!(
                    webhook = %report.webhook_url,
                    status = report.submission.status,
                    retried = report.retried,
                    "Flow finished"
                );
            }
            Err(err) => {
                error!(error = %err, "Flow failed");
            }
        }
    }

    /// Run the flow, returning the report or the first failure.
    #[tracing::instrument(
        name = "flow.run",
        skip(self, identity),
        fields(flow.reg_no = %identity.registration_id)
    )]
    pub async fn execute(&self, identity: &IdentityInput) -> Result<FlowReport, FlowError> {
        let credential = self
            .gateway
            .generate_webhook(&self.config.generate_url, identity)
            .instrument(info_span!("flow.generate", url = %self.config.generate_url))
            .await?;

        let webhook_url = credential
            .resolve_url(&self.config.fallback_submit_url)
            .to_string();
        if credential.webhook_url.is_none() {
            info!(webhook = %webhook_url, "No webhook issued, using fallback");
        } else {
            info!(webhook = %webhook_url, "Webhook issued");
        }

        let choice = select_payload(&identity.registration_id)?;
        let final_query = load_payload(&self.payloads, choice).await?;
        info!(
            resource = choice.resource(),
            payload = %choice,
            "Selected payload"
        );

        self.fs
            .write_file(&self.config.output_path, &final_query)
            .await?;
        info!(path = %self.config.output_path.display(), "Final payload stored");

        let (submission, retried) = self
            .submit_with_retry(&webhook_url, &credential.access_token, &final_query)
            .instrument(info_span!("flow.submit", webhook = %webhook_url))
            .await?;

        Ok(FlowReport {
            webhook_url,
            choice,
            output_path: self.config.output_path.clone(),
            retried,
            submission,
        })
    }

    /// Submit once with the configured prefix; on 401 with a blank prefix,
    /// submit exactly once more with `Bearer `.
    ///
    /// Returns the final result and whether the retry happened.
    async fn submit_with_retry(
        &self,
        webhook_url: &str,
        token: &SecretString,
        final_query: &str,
    ) -> Result<(SubmissionResult, bool), FlowError> {
        let authorization = authorization_value(&self.config.auth_prefix, token);
        let first = self
            .gateway
            .submit(webhook_url, &authorization, final_query)
            .await?;

        if !first.is_unauthorized() {
            log_submission("Webhook response", &first);
            return Ok((first, false));
        }

        if !self.config.has_blank_prefix() {
            warn!("401 Unauthorized with configured prefix, not retrying");
            return Err(FlowError::Unauthorized { retried: false });
        }

        warn!("401 Unauthorized. Retrying with '{BEARER_PREFIX}' prefix");
        let authorization = authorization_value(BEARER_PREFIX, token);
        let retry = self
            .gateway
            .submit(webhook_url, &authorization, final_query)
            .await?;
        log_submission("Retry response", &retry);

        if retry.is_unauthorized() {
            return Err(FlowError::Unauthorized { retried: true });
        }
        Ok((retry, true))
    }
}

fn log_submission(message: &str, result: &SubmissionResult) {
    if result.is_success() {
        info!(status = result.status, body = %result.body, "{message}");
    } else {
        warn!(status = result.status, body = %result.body, "{message}");
    }
}
