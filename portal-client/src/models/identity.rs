use serde::Deserialize;
use uuid::Uuid;

use super::Role;

/// Identity traits as registered with the provider. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityTraits {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// The authenticated subject as the provider/gateway reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub traits: IdentityTraits,
}

/// A resolved session: the identity plus its platform-wide role.
///
/// A session whose platform role could not be resolved gates as
/// unauthenticated - role absence fails closed, never open.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
    pub platform_role: Option<Role>,
}
