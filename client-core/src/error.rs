use thiserror::Error;

/// Error taxonomy for every provider/gateway interaction.
///
/// Expected failure modes (form validation, business conflicts) are not
/// errors: the domain clients return them as discriminated outcomes. This
/// enum covers the cases that abort an operation outright.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),
}

impl ClientError {
    /// Wrap a decode/shape failure.
    pub fn unexpected(err: impl Into<anyhow::Error>) -> Self {
        ClientError::UnexpectedResponse(err.into())
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ClientError::Unauthenticated)
    }

    /// Classify a denial status, keeping the server-supplied message when one
    /// was decoded. 401 means the session is gone; 403/409 are normal,
    /// reportable outcomes for a user with a valid session.
    pub fn from_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED => ClientError::Unauthenticated,
            reqwest::StatusCode::FORBIDDEN => ClientError::Forbidden(message.unwrap_or_else(
                || "You do not have permission to perform this action.".to_string(),
            )),
            reqwest::StatusCode::CONFLICT => ClientError::Conflict(
                message.unwrap_or_else(|| "The request conflicts with the current state.".to_string()),
            ),
            _ => ClientError::UnexpectedResponse(anyhow::anyhow!(
                "unexpected status {}: {}",
                status,
                message.unwrap_or_default()
            )),
        }
    }

    /// Human-readable message for display. Raw transport/decoder errors are
    /// translated, never shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            ClientError::Unauthenticated => {
                "Your session has expired. Please log in again.".to_string()
            }
            ClientError::Forbidden(msg) | ClientError::Conflict(msg) => msg.clone(),
            ClientError::UnexpectedResponse(_) => {
                "The server returned an unexpected response. Please try again.".to_string()
            }
            ClientError::Config(_) => "The application is misconfigured.".to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::UnexpectedResponse(anyhow::Error::new(err))
    }
}
