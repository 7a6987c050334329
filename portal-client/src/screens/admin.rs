use uuid::Uuid;

use crate::models::{Role, Session};
use crate::nav::{MountGuard, NavTarget};
use crate::screens::{Feedback, Phase};
use crate::services::{
    policy, AdminDirectory, MutationOutcome, ProtectedRoute, Resolution, SessionGate,
};

/// The platform user-management screen. Gated by the admin introspection
/// route; the directory itself is fetched only after the session resolves.
pub struct AdminScreen {
    guard: MountGuard,
    state: Phase<Session>,
}

impl Default for AdminScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminScreen {
    pub fn new() -> Self {
        Self {
            guard: MountGuard::new(),
            state: Phase::Loading,
        }
    }

    pub fn state(&self) -> &Phase<Session> {
        &self.state
    }

    pub async fn load(
        &mut self,
        gate: &SessionGate,
        directory: &mut AdminDirectory,
    ) -> Option<NavTarget> {
        if !self.guard.arm() {
            return None;
        }

        let session = match gate.resolve(ProtectedRoute::Admin).await {
            Ok(Resolution::Session(session)) if session.platform_role.is_some() => session,
            Ok(_) => return Some(NavTarget::Login),
            Err(e) => {
                self.state = Phase::Error(e.user_message());
                return None;
            }
        };

        match directory.refresh().await {
            Ok(_) => {
                self.state = Phase::Ready(session);
                None
            }
            Err(e) if e.is_unauthenticated() => Some(NavTarget::Login),
            Err(e) => {
                self.state = Phase::Error(e.user_message());
                None
            }
        }
    }

    /// Whether the control setting `target` to `candidate` is enabled. The
    /// viewer's own row never offers role changes.
    pub fn role_button_enabled(
        &self,
        directory: &AdminDirectory,
        target: Uuid,
        candidate: Role,
    ) -> bool {
        let Phase::Ready(session) = &self.state else {
            return false;
        };
        let Some(actor_role) = session.platform_role else {
            return false;
        };
        let Some(identity) = directory.identities().iter().find(|i| i.id == target) else {
            return false;
        };
        let Some(current) = identity.role else {
            // An unresolved role still gets its buttons: assigning a real
            // role is the only way out of that state.
            return actor_role == Role::Admin && target != session.identity.id;
        };
        policy::can_change_role(actor_role, target == session.identity.id, current, candidate)
    }

    pub async fn set_platform_role(
        &mut self,
        directory: &mut AdminDirectory,
        target: Uuid,
        candidate: Role,
    ) -> Feedback {
        if !self.role_button_enabled(directory, target, candidate) {
            return Feedback::Error("You cannot change this user's role.".to_string());
        }

        match directory.update_platform_role(target, candidate).await {
            Ok(MutationOutcome::Applied) => Feedback::Success(format!("Role set to {candidate}")),
            Ok(MutationOutcome::Rejected { message }) => Feedback::Error(message),
            Err(e) => Feedback::Error(e.user_message()),
        }
    }
}
