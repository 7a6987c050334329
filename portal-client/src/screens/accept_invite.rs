//! Invite acceptance: the one-shot server-side effect behind the
//! `/accept/{orgId}` URL.

use crate::nav::{MountGuard, NavTarget};
use crate::services::{InviteAcceptance, OrgMembershipStore};

/// Rendered state of the acceptance screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptPhase {
    Idle,
    Accepting,
    Accepted,
    Failed(String),
}

/// What to tell the user and where to take them once the attempt settles.
/// Failure never leaves the user on the invite URL - a refresh there would
/// retry acceptance by accident.
#[derive(Debug)]
pub struct AcceptResult {
    pub message: String,
    pub target: NavTarget,
}

/// Accepts the invite token carried by the route, exactly once per mount.
///
/// The guard is owned by this instance, not by the module: a process-wide
/// flag would wrongly suppress acceptance of a different token (or the same
/// token in a later session) for as long as the process lives.
pub struct InviteAcceptor {
    org_id: String,
    guard: MountGuard,
    phase: AcceptPhase,
}

impl InviteAcceptor {
    pub fn new(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            guard: MountGuard::new(),
            phase: AcceptPhase::Idle,
        }
    }

    pub fn phase(&self) -> &AcceptPhase {
        &self.phase
    }

    /// Run the acceptance. However many times the triggering effect re-runs,
    /// only the first call issues a request; later calls return `None`
    /// without touching the network. No automatic retry either way: the
    /// token is single-use, so a retry would no-op or repeat a real failure.
    pub async fn run(&mut self, store: &mut OrgMembershipStore) -> Option<AcceptResult> {
        if !self.guard.arm() {
            return None;
        }
        self.phase = AcceptPhase::Accepting;

        match store.accept_invite(&self.org_id).await {
            Ok(InviteAcceptance::Accepted) => {
                self.phase = AcceptPhase::Accepted;
                // The membership list just changed server-side; refresh the
                // cache before the detail screen reads it. Failure here only
                // costs staleness, not the acceptance.
                if let Err(e) = store.refresh().await {
                    tracing::warn!(org_id = %self.org_id, error = %e, "membership refresh after acceptance failed");
                }
                Some(AcceptResult {
                    message: "You've successfully joined.".to_string(),
                    target: NavTarget::OrgDetail(self.org_id.clone()),
                })
            }
            Ok(InviteAcceptance::Refused { message }) => {
                let message = message
                    .unwrap_or_else(|| "Invite not found or already accepted".to_string());
                self.phase = AcceptPhase::Failed(message.clone());
                Some(AcceptResult {
                    message,
                    target: NavTarget::Home,
                })
            }
            Err(e) => {
                let message = e.user_message();
                self.phase = AcceptPhase::Failed(message.clone());
                Some(AcceptResult {
                    message,
                    target: NavTarget::Home,
                })
            }
        }
    }
}
