use crate::nav::{MountGuard, NavTarget};
use crate::screens::{Feedback, Phase};
use crate::services::{
    CreateOutcome, OrgMembershipStore, ProtectedRoute, Resolution, SessionGate,
};

/// The organizations list screen. The list itself lives in the membership
/// store; this controller owns the lifecycle around it.
pub struct OrganizationsScreen {
    guard: MountGuard,
    state: Phase<()>,
}

impl Default for OrganizationsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizationsScreen {
    pub fn new() -> Self {
        Self {
            guard: MountGuard::new(),
            state: Phase::Loading,
        }
    }

    pub fn state(&self) -> &Phase<()> {
        &self.state
    }

    /// Session resolution first, then the membership list - sequenced, not
    /// raced, because the list is meaningless without a resolved identity.
    pub async fn load(
        &mut self,
        gate: &SessionGate,
        store: &mut OrgMembershipStore,
    ) -> Option<NavTarget> {
        if !self.guard.arm() {
            return None;
        }

        match gate.resolve(ProtectedRoute::Home).await {
            Ok(Resolution::Session(session)) if session.platform_role.is_some() => {}
            Ok(_) => return Some(NavTarget::Login),
            Err(e) => {
                self.state = Phase::Error(e.user_message());
                return None;
            }
        }

        match store.refresh().await {
            Ok(_) => {
                self.state = Phase::Ready(());
                None
            }
            Err(e) if e.is_unauthenticated() => Some(NavTarget::Login),
            Err(e) => {
                self.state = Phase::Error(e.user_message());
                None
            }
        }
    }

    /// Create an organization. On success the store has already prepended
    /// it to the cached list.
    pub async fn create_organization(
        &mut self,
        store: &mut OrgMembershipStore,
        name: &str,
        description: &str,
    ) -> Feedback {
        match store.create(name, description).await {
            Ok(CreateOutcome::Created(org)) => {
                Feedback::Success(format!("Organization {} created successfully.", org.name))
            }
            Ok(CreateOutcome::Rejected { message }) => Feedback::Error(message),
            Err(e) => Feedback::Error(e.user_message()),
        }
    }
}
