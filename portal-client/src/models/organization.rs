use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::{Identity, Role};

/// One organization, as listed by the gateway. List order is
/// provider-defined and preserved as received.
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    // The gateway marshals the member list under its Go field name.
    #[serde(rename = "Users", default)]
    pub members: Vec<OrgMember>,
}

/// Membership of one user in one organization. Exactly one role at a time;
/// role changes are total replacements.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgMember {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: Role,
}

/// The detail view of one organization: the org itself, who is looking at
/// it, and the role they hold inside it.
#[derive(Debug, Clone)]
pub struct OrgDetail {
    pub organization: Organization,
    pub viewer: Identity,
    pub viewer_role: Role,
}

impl OrgDetail {
    pub fn members(&self) -> &[OrgMember] {
        &self.organization.members
    }

    pub fn member_role(&self, user_id: Uuid) -> Option<Role> {
        self.organization
            .members
            .iter()
            .find(|m| m.id == user_id)
            .map(|m| m.role)
    }
}
