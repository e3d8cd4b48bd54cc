//! Webhook gateway implementations.
//!
//! Contains the reqwest-backed implementation of the [`WebhookGateway`]
//! trait defined in `hookflow-core`, plus the wire DTOs it exchanges with
//! the Generation and Submission endpoints.
//!
//! [`WebhookGateway`]: hookflow_core::gateway::WebhookGateway

pub mod http;
mod types;

pub use http::HttpWebhookGateway;
