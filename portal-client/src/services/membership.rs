//! Client-side cache of organization membership, refreshed from the gateway.
//!
//! The cache is owned by the screen that fetched it for the duration of that
//! screen's mount. No background revalidation, no cross-tab sync. Role
//! mutations patch the cached detail view in place instead of re-fetching,
//! trading a small staleness window for fewer round trips.

use reqwest::StatusCode;
use validator::Validate;

use client_core::config::Settings;
use client_core::error::ClientError;
use client_core::http::Api;

use crate::dtos::org::{
    CreateOrgRequest, InviteRequest, OrgDetailResponse, UpdateMemberRoleRequest,
};
use crate::dtos::ErrorBody;
use crate::models::{OrgDetail, Organization, Role};
use crate::services::MutationOutcome;
use uuid::Uuid;

/// Outcome of `create`.
#[derive(Debug)]
pub enum CreateOutcome {
    Created(Organization),
    Rejected { message: String },
}

/// Outcome of one invite acceptance attempt. `Refused` keeps the
/// server-supplied message when one was decodable.
#[derive(Debug)]
pub enum InviteAcceptance {
    Accepted,
    Refused { message: Option<String> },
}

pub struct OrgMembershipStore {
    gateway: Api,
    organizations: Vec<Organization>,
    detail: Option<OrgDetail>,
}

impl OrgMembershipStore {
    pub fn new(client: &reqwest::Client, settings: &Settings) -> Self {
        Self {
            gateway: Api::new(client.clone(), &settings.gateway.url),
            organizations: Vec::new(),
            detail: None,
        }
    }

    /// Organizations the user belongs to, in the order the gateway returned
    /// them. Never re-sorted client-side.
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn detail(&self) -> Option<&OrgDetail> {
        self.detail.as_ref()
    }

    /// Re-fetch the membership list (`GET /orgs/get-all`), replacing the
    /// cache.
    pub async fn refresh(&mut self) -> Result<&[Organization], ClientError> {
        let response = self.gateway.get("/orgs/get-all").await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_status(status, ErrorBody::decode(&body)));
        }

        self.organizations = serde_json::from_str(&body)?;
        tracing::debug!(count = self.organizations.len(), "membership list refreshed");
        Ok(&self.organizations)
    }

    /// Organizations created by the caller (`GET /orgs/get`). Not cached;
    /// only the creator-facing screen reads it.
    pub async fn list_created(&self) -> Result<Vec<Organization>, ClientError> {
        let response = self.gateway.get("/orgs/get").await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_status(status, ErrorBody::decode(&body)));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Load one organization's detail view (`GET /orgs/get/{orgId}`),
    /// replacing the cached detail.
    pub async fn load_detail(&mut self, org_id: &str) -> Result<&OrgDetail, ClientError> {
        let response = self.gateway.get(&format!("/orgs/get/{org_id}")).await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_status(status, ErrorBody::decode(&body)));
        }

        let decoded: OrgDetailResponse = serde_json::from_str(&body)?;
        Ok(self.detail.insert(OrgDetail {
            organization: decoded.org,
            viewer: decoded.user,
            viewer_role: decoded.role,
        }))
    }

    /// Create an organization (`POST /orgs/create`). The creator becomes its
    /// admin server-side; the new organization is prepended to the cache.
    pub async fn create(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<CreateOutcome, ClientError> {
        let request = CreateOrgRequest {
            name: name.to_string(),
            description: description.to_string(),
        };
        if request.validate().is_err() {
            return Ok(CreateOutcome::Rejected {
                message: "Name and description are required.".to_string(),
            });
        }

        let response = self.gateway.post("/orgs/create", &request).await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthenticated);
        }
        let body = response.text().await?;
        if !status.is_success() {
            let message = ErrorBody::decode(&body)
                .unwrap_or_else(|| "Failed to create organization".to_string());
            tracing::warn!(status = %status, "organization creation rejected");
            return Ok(CreateOutcome::Rejected { message });
        }

        let organization: Organization = serde_json::from_str(&body)?;
        tracing::info!(org_id = %organization.id, name = %organization.name, "organization created");
        self.organizations.insert(0, organization.clone());
        Ok(CreateOutcome::Created(organization))
    }

    /// Invite `email` to an organization (`POST /orgs/invite/{orgId}`).
    ///
    /// The member list is not touched: the invited user is not a member
    /// until they accept.
    pub async fn invite(
        &self,
        org_id: &str,
        email: &str,
    ) -> Result<MutationOutcome, ClientError> {
        let (org_name, description) = self.organization_summary(org_id);
        let request = InviteRequest {
            org_id: org_id.to_string(),
            org_name,
            email: email.to_string(),
            description,
        };
        if request.validate().is_err() {
            return Ok(MutationOutcome::Rejected {
                message: "Please enter a valid email address.".to_string(),
            });
        }

        let response = self
            .gateway
            .post(&format!("/orgs/invite/{org_id}"), &request)
            .await?;

        self.mutation_outcome(response, "Failed to send invite")
            .await
    }

    /// Replace one member's role (`POST /orgs/update-role/{orgId}`). On
    /// success the cached detail view is patched in place; the list is not
    /// re-fetched.
    pub async fn update_member_role(
        &mut self,
        org_id: &str,
        user_id: Uuid,
        role: Role,
    ) -> Result<MutationOutcome, ClientError> {
        let request = UpdateMemberRoleRequest { user_id, role };
        let response = self
            .gateway
            .post(&format!("/orgs/update-role/{org_id}"), &request)
            .await?;

        let outcome = self
            .mutation_outcome(response, "Failed to update user role")
            .await?;

        if outcome.is_applied() {
            if let Some(detail) = self.detail.as_mut() {
                if detail.organization.id == org_id {
                    if let Some(member) = detail
                        .organization
                        .members
                        .iter_mut()
                        .find(|m| m.id == user_id)
                    {
                        member.role = role;
                    }
                }
            }
            tracing::info!(org_id = %org_id, user_id = %user_id, role = %role, "member role replaced");
        }

        Ok(outcome)
    }

    /// Accept the pending invite for `org_id` (`GET /orgs/accept/{orgId}`).
    /// The server enforces single use; callers enforce at most one attempt
    /// per mount.
    pub async fn accept_invite(&self, org_id: &str) -> Result<InviteAcceptance, ClientError> {
        let response = self.gateway.get(&format!("/orgs/accept/{org_id}")).await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(org_id = %org_id, "invite accepted");
            return Ok(InviteAcceptance::Accepted);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthenticated);
        }

        let body = response.text().await?;
        let message = ErrorBody::decode(&body);
        tracing::warn!(org_id = %org_id, status = %status, "invite acceptance refused");
        Ok(InviteAcceptance::Refused { message })
    }

    fn organization_summary(&self, org_id: &str) -> (String, String) {
        if let Some(detail) = self.detail.as_ref() {
            if detail.organization.id == org_id {
                return (
                    detail.organization.name.clone(),
                    detail.organization.description.clone(),
                );
            }
        }
        self.organizations
            .iter()
            .find(|org| org.id == org_id)
            .map(|org| (org.name.clone(), org.description.clone()))
            .unwrap_or_default()
    }

    async fn mutation_outcome(
        &self,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<MutationOutcome, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(MutationOutcome::Applied);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthenticated);
        }

        let body = response.text().await?;
        let message = ErrorBody::decode(&body).unwrap_or_else(|| fallback.to_string());
        tracing::warn!(status = %status, message = %message, "gateway rejected mutation");
        Ok(MutationOutcome::Rejected { message })
    }
}
