//! Authorization header composition.

use secrecy::{ExposeSecret, SecretString};

/// Prefix used for the single retry after a 401 with no configured prefix.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Build an `Authorization` header value as `<prefix><token>`.
///
/// The prefix is used verbatim; callers wanting a space must include it.
pub fn authorization_value(prefix: &str, token: &SecretString) -> SecretString {
    SecretString::from(format!("{prefix}{}", token.expose_secret()))
}
