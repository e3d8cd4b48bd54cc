//! Service-level abstractions shared by the runner.

pub mod fs;
