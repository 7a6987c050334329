use uuid::Uuid;

use crate::models::Role;
use crate::nav::{MountGuard, NavTarget};
use crate::screens::{Feedback, Phase};
use crate::services::{
    policy, MutationOutcome, OrgMembershipStore, ProtectedRoute, Resolution, SessionGate,
};

/// What the detail screen may render for the current viewer. Controls these
/// gates deny are absent, not merely disabled.
#[derive(Debug)]
pub struct OrgDetailGates {
    pub can_invite: bool,
    pub can_manage_roles: bool,
}

/// One organization's detail screen: member list, invite panel, role
/// controls.
pub struct OrgDetailScreen {
    org_id: String,
    guard: MountGuard,
    state: Phase<OrgDetailGates>,
    pub invite_email: String,
    invite_panel_open: bool,
}

impl OrgDetailScreen {
    pub fn new(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            guard: MountGuard::new(),
            state: Phase::Loading,
            invite_email: String::new(),
            invite_panel_open: false,
        }
    }

    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    pub fn state(&self) -> &Phase<OrgDetailGates> {
        &self.state
    }

    pub fn is_invite_panel_open(&self) -> bool {
        self.invite_panel_open
    }

    pub fn open_invite_panel(&mut self) {
        self.invite_panel_open = true;
    }

    /// Session first, then the detail fetch.
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

        match store.load_detail(&self.org_id).await {
            Ok(detail) => {
                self.state = Phase::Ready(OrgDetailGates {
                    can_invite: policy::can_invite(detail.viewer_role),
                    can_manage_roles: policy::can_manage_org_roles(detail.viewer_role),
                });
                None
            }
            Err(e) if e.is_unauthenticated() => Some(NavTarget::Login),
            Err(e) => {
                self.state = Phase::Error(e.user_message());
                None
            }
        }
    }

    /// Whether the control for moving `member_id` to `candidate` is enabled.
    pub fn role_button_enabled(
        &self,
        store: &OrgMembershipStore,
        member_id: Uuid,
        candidate: Role,
    ) -> bool {
        let Some(detail) = store.detail() else {
            return false;
        };
        let Some(current) = detail.member_role(member_id) else {
            return false;
        };
        policy::can_change_role(
            detail.viewer_role,
            member_id == detail.viewer.id,
            current,
            candidate,
        )
    }

    /// Send the invite for the entered email. The panel closes either way;
    /// an empty email is a silent no-op. On success the input clears.
    pub async fn send_invite(&mut self, store: &mut OrgMembershipStore) -> Option<Feedback> {
        self.invite_panel_open = false;
        if self.invite_email.is_empty() {
            return None;
        }

        let outcome = match store.invite(&self.org_id, &self.invite_email).await {
            Ok(outcome) => outcome,
            Err(e) => return Some(Feedback::Error(e.user_message())),
        };

        match outcome {
            MutationOutcome::Applied => {
                self.invite_email.clear();
                let org_name = store
                    .detail()
                    .map(|d| d.organization.name.clone())
                    .unwrap_or_default();
                Some(Feedback::Success(format!("User invited to {org_name}")))
            }
            MutationOutcome::Rejected { message } => Some(Feedback::Error(message)),
        }
    }

    /// Replace one member's role. The predicate runs again here so a stale
    /// or forged control cannot push a transition the viewer may not make;
    /// the server still has the final say.
    pub async fn change_member_role(
        &mut self,
        store: &mut OrgMembershipStore,
        member_id: Uuid,
        candidate: Role,
    ) -> Feedback {
        if !self.role_button_enabled(store, member_id, candidate) {
            return Feedback::Error("You cannot change this member's role.".to_string());
        }

        match store
            .update_member_role(&self.org_id, member_id, candidate)
            .await
        {
            Ok(MutationOutcome::Applied) => Feedback::Success(format!("Role set to {candidate}")),
            Ok(MutationOutcome::Rejected { message }) => Feedback::Error(message),
            Err(e) => Feedback::Error(e.user_message()),
        }
    }
}
