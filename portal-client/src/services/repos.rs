//! GitHub repository catalog, relayed by the gateway.

use validator::Validate;

use client_core::config::Settings;
use client_core::error::ClientError;
use client_core::http::Api;

use crate::dtos::repos::{CreateRepositoryRequest, Repository};
use crate::dtos::ErrorBody;

/// What the catalog has to show. `Unavailable` means the gateway holds no
/// GitHub credential for this user yet (the account is not connected); it is
/// not a session failure.
#[derive(Debug)]
pub enum RepoListing {
    Available(Vec<Repository>),
    Unavailable,
}

/// Outcome of a repository creation attempt.
#[derive(Debug)]
pub enum RepoCreation {
    Created(Repository),
    Rejected { message: String },
}

pub struct RepoCatalog {
    gateway: Api,
}

impl RepoCatalog {
    pub fn new(client: &reqwest::Client, settings: &Settings) -> Self {
        Self {
            gateway: Api::new(client.clone(), &settings.gateway.url),
        }
    }

    /// List the user's repositories (`GET /github/repos`).
    pub async fn list(&self) -> Result<RepoListing, ClientError> {
        let response = self.gateway.get("/github/repos").await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "repository listing unavailable");
            return Ok(RepoListing::Unavailable);
        }

        let body = response.text().await?;
        let repositories: Vec<Repository> = serde_json::from_str(&body)?;
        Ok(RepoListing::Available(repositories))
    }

    /// Create a repository (`POST /github/repos`).
    pub async fn create(
        &self,
        request: &CreateRepositoryRequest,
    ) -> Result<RepoCreation, ClientError> {
        if request.validate().is_err() {
            return Ok(RepoCreation::Rejected {
                message: "Repository name is required.".to_string(),
            });
        }

        let response = self.gateway.post("/github/repos", request).await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = ErrorBody::decode(&body)
                .unwrap_or_else(|| "Failed to create repository.".to_string());
            tracing::warn!(status = %status, "repository creation rejected");
            return Ok(RepoCreation::Rejected { message });
        }

        let repository: Repository = serde_json::from_str(&body)?;
        tracing::info!(name = %repository.name, "repository created");
        Ok(RepoCreation::Created(repository))
    }
}
