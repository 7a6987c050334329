pub mod admin;
pub mod auth;
pub mod flow;
pub mod org;
pub mod repos;

use serde::Deserialize;

/// Error body shape used by the gateway. Some handlers reply with `error`,
/// the repository ones with `message`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best-effort decode; an unparseable body yields no message.
    pub fn decode(raw: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(raw)
            .ok()
            .and_then(|body| body.error.or(body.message))
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_both_error_keys() {
        assert_eq!(
            ErrorBody::decode(r#"{"error": "Access denied"}"#).as_deref(),
            Some("Access denied")
        );
        assert_eq!(
            ErrorBody::decode(r#"{"message": "Invalid input"}"#).as_deref(),
            Some("Invalid input")
        );
        assert_eq!(ErrorBody::decode("not json"), None);
        assert_eq!(ErrorBody::decode("{}"), None);
    }
}
