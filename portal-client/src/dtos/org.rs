use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Identity, Organization, Role};

/// Body for `POST /orgs/create`.
#[derive(Debug, Serialize, Validate)]
pub struct CreateOrgRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Body for `POST /orgs/invite/{orgId}`. The org name and description ride
/// along for the notification the gateway sends to the invitee.
#[derive(Debug, Serialize, Validate)]
pub struct InviteRequest {
    pub org_id: String,
    pub org_name: String,
    #[validate(email)]
    pub email: String,
    pub description: String,
}

/// Body for `POST /orgs/update-role/{orgId}`.
#[derive(Debug, Serialize)]
pub struct UpdateMemberRoleRequest {
    pub user_id: Uuid,
    pub role: Role,
}

/// Response from `GET /orgs/get/{orgId}`: the organization, the caller's
/// role inside it, and the caller's identity.
#[derive(Debug, Deserialize)]
pub struct OrgDetailResponse {
    pub org: Organization,
    pub role: Role,
    pub user: Identity,
}
