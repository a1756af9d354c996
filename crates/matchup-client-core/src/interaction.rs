use serde::Deserialize;

/// Fallback shown when the server rejects an interaction without a message.
pub const GENERIC_REJECTION_MESSAGE: &str = "the server rejected this interaction";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode interaction response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
}

/// One like/pass response body. Constructed from a single HTTP response,
/// consumed immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InteractionResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub is_match: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Mutual like; the page should move to the matches view.
    MatchFound,
    /// Like or pass recorded; the card fades and the feed refreshes.
    CardDismissed,
}

/// A non-2xx status is a failure regardless of what the body says; the body
/// is only decoded for successful statuses.
pub fn decode_interaction_response(
    status: u16,
    body: &str,
) -> Result<InteractionResult, InteractionError> {
    if !(200..=299).contains(&status) {
        return Err(InteractionError::Status(status));
    }
    serde_json::from_str(body).map_err(|error| InteractionError::Decode(error.to_string()))
}

pub fn classify_outcome(result: InteractionResult) -> Result<InteractionOutcome, InteractionError> {
    if !result.success {
        return Err(InteractionError::Rejected(
            result
                .error
                .unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string()),
        ));
    }

    if result.is_match {
        Ok(InteractionOutcome::MatchFound)
    } else {
        Ok(InteractionOutcome::CardDismissed)
    }
}
