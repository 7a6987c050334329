//! Role model - the reader/writer/admin ladder used at both platform and
//! organization scope.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A role at either scope. Platform and organization roles are fully
/// independent: platform admin grants nothing inside an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Writer,
    Admin,
}

impl Role {
    /// All roles, in escalation order. Screens render one control per entry.
    pub const ALL: [Role; 3] = [Role::Reader, Role::Writer, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Writer => "writer",
            Role::Admin => "admin",
        }
    }

    /// Parse a wire role string. The gateway emits `none`/`unknown` sentinels
    /// for users it could not resolve; those parse to `None` so role absence
    /// fails closed.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "reader" => Some(Role::Reader),
            "writer" => Some(Role::Writer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The gateway serialises roles in two shapes: a bare string, and a legacy
/// single-element array. Normalize both to a scalar here; nothing downstream
/// ever sees the array form.
pub fn deserialize_opt_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RoleField {
        One(String),
        Many(Vec<String>),
        // Anything else (null, objects, numbers) resolves to no role.
        Other(serde_json::Value),
    }

    let field = Option::<RoleField>::deserialize(deserializer)?;
    Ok(field.and_then(|f| match f {
        RoleField::One(s) => Role::parse(&s),
        RoleField::Many(values) => values.first().and_then(|s| Role::parse(s)),
        RoleField::Other(_) => None,
    }))
}
