use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{deserialize_opt_role, IdentityTraits, Role};

/// Response from `GET /api/admin/identities`.
#[derive(Debug, Deserialize)]
pub struct IdentityDirectoryResponse {
    pub data: Vec<AdminIdentity>,
}

/// One platform user as the admin directory reports it. The role field uses
/// the same dual wire encoding as session introspection; unknown roles
/// resolve to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub traits: IdentityTraits,
    #[serde(default, deserialize_with = "deserialize_opt_role")]
    pub role: Option<Role>,
}

/// Body for `POST /api/admin/update-role`.
#[derive(Debug, Serialize)]
pub struct UpdatePlatformRoleRequest {
    pub user_id: Uuid,
    pub role: Role,
}
