use thiserror::Error;

/// Errors raised while executing a flow.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("registration id '{0}' contains no digits")]
    InvalidRegistrationId(String),

    #[error("payload resource '{resource}' is missing or empty")]
    PayloadUnavailable { resource: String },

    #[error("submission unauthorized (retried: {retried})")]
    Unauthorized { retried: bool },

    #[error("http error: {message}")]
    Http { message: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from validating a loaded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required config field '{0}'")]
    MissingField(&'static str),
}
