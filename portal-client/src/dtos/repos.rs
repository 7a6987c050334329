use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One GitHub repository as relayed by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Body for `POST /github/repos`.
#[derive(Debug, Serialize, Validate)]
pub struct CreateRepositoryRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    pub private: bool,
}
