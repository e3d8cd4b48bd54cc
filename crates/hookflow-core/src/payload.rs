//! Payload selection and loading.
//!
//! A registration id picks payload A or B from the parity of its trailing
//! digits. The chosen payload is then read through a [`PayloadSource`] and
//! must be non-blank.

use hookflow_types::error::FlowError;
use hookflow_types::flow::PayloadChoice;

/// Where the static payload resources come from.
///
/// Implementations live in hookflow-infra (bundled resources, a directory on
/// disk). `Ok(None)` means the resource does not exist.
pub trait PayloadSource: Send + Sync {
    fn load(
        &self,
        resource: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, std::io::Error>> + Send;
}

/// Choose a payload from the last two digits of `registration_id`.
///
/// Non-digit characters are ignored. Fewer than two digits uses what is
/// there; none at all is an error.
pub fn select_payload(registration_id: &str) -> Result<PayloadChoice, FlowError> {
    let digits: Vec<u32> = registration_id
        .chars()
        .filter(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.is_empty() {
        return Err(FlowError::InvalidRegistrationId(registration_id.to_string()));
    }

    let tail = &digits[digits.len().saturating_sub(2)..];
    let value = tail.iter().fold(0, |acc, d| acc * 10 + d);

    if value % 2 == 1 {
        Ok(PayloadChoice::A)
    } else {
        Ok(PayloadChoice::B)
    }
}

/// Load the payload for `choice`, trimmed.
///
/// Fails with [`FlowError::PayloadUnavailable`] when the resource is missing
/// or contains only whitespace.
pub async fn load_payload<S: PayloadSource>(
    source: &S,
    choice: PayloadChoice,
) -> Result<String, FlowError> {
    let resource = choice.resource();
    let content = source.load(resource).await?;

    match content.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(FlowError::PayloadUnavailable {
            resource: resource.to_string(),
        }),
    }
}
