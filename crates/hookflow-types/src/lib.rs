//! Shared domain types for hookflow.
//!
//! Identity input, webhook credentials, payload choice, submission results,
//! the flow configuration, and the error taxonomy.
//!
//! Zero I/O -- only serde, thiserror, secrecy.

pub mod config;
pub mod error;
pub mod flow;
