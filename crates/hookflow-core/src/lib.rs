//! Flow logic and port trait definitions for hookflow.
//!
//! This crate defines the "ports" (gateway, payload source, filesystem) that
//! the infrastructure layer implements, plus the `FlowRunner` that drives a
//! single execution. It depends only on `hookflow-types` -- never on
//! `hookflow-infra` or any network/IO crate.

pub mod auth;
pub mod gateway;
pub mod payload;
pub mod runner;
pub mod service;
