//! Infrastructure layer for hookflow.
//!
//! Contains implementations of the ports defined in `hookflow-core`:
//! the reqwest-backed webhook gateway, bundled and on-disk payload sources,
//! the local filesystem adapter, and the `hookflow.toml` loader.

pub mod config;
pub mod filesystem;
pub mod gateway;
pub mod payload;
