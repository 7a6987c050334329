//! Platform admin directory: every identity known to the provider, with its
//! platform role, plus the role-replacement call.

use reqwest::StatusCode;

use client_core::config::Settings;
use client_core::error::ClientError;
use client_core::http::Api;

use crate::dtos::admin::{AdminIdentity, IdentityDirectoryResponse, UpdatePlatformRoleRequest};
use crate::dtos::ErrorBody;
use crate::models::Role;
use crate::services::MutationOutcome;
use uuid::Uuid;

pub struct AdminDirectory {
    gateway: Api,
    identities: Vec<AdminIdentity>,
}

impl AdminDirectory {
    pub fn new(client: &reqwest::Client, settings: &Settings) -> Self {
        Self {
            gateway: Api::new(client.clone(), &settings.gateway.url),
            identities: Vec::new(),
        }
    }

    pub fn identities(&self) -> &[AdminIdentity] {
        &self.identities
    }

    /// Re-fetch the directory (`GET /api/admin/identities`).
    pub async fn refresh(&mut self) -> Result<&[AdminIdentity], ClientError> {
        let response = self.gateway.get("/api/admin/identities").await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_status(status, ErrorBody::decode(&body)));
        }

        let decoded: IdentityDirectoryResponse = serde_json::from_str(&body)?;
        self.identities = decoded.data;
        tracing::debug!(count = self.identities.len(), "admin directory refreshed");
        Ok(&self.identities)
    }

    /// Replace one user's platform role (`POST /api/admin/update-role`). On
    /// success the cached entry is patched in place.
    pub async fn update_platform_role(
        &mut self,
        user_id: Uuid,
        role: Role,
    ) -> Result<MutationOutcome, ClientError> {
        let request = UpdatePlatformRoleRequest { user_id, role };
        let response = self
            .gateway
            .post("/api/admin/update-role", &request)
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthenticated);
        }
        if !status.is_success() {
            let body = response.text().await?;
            let message =
                ErrorBody::decode(&body).unwrap_or_else(|| "Could not update role".to_string());
            tracing::warn!(user_id = %user_id, status = %status, "platform role update rejected");
            return Ok(MutationOutcome::Rejected { message });
        }

        if let Some(identity) = self.identities.iter_mut().find(|i| i.id == user_id) {
            identity.role = Some(role);
        }
        tracing::info!(user_id = %user_id, role = %role, "platform role replaced");
        Ok(MutationOutcome::Applied)
    }
}
