//! Authorization predicates gating every mutating control.
//!
//! Pure functions, no I/O. These decide what gets rendered and enabled; the
//! server remains authoritative, so a 403/409 on the actual call is still a
//! normal, reportable outcome.

use crate::models::Role;

/// Only an organization admin may change member roles.
pub fn can_manage_org_roles(actor_org_role: Role) -> bool {
    actor_org_role == Role::Admin
}

/// Readers cannot invite; writers and admins can.
pub fn can_invite(actor_org_role: Role) -> bool {
    actor_org_role != Role::Reader
}

/// Platform readers cannot create repositories.
pub fn can_create_repository(actor_platform_role: Role) -> bool {
    actor_platform_role != Role::Reader
}

/// Whether `actor_org_role` may move the target from `target_current_role`
/// to `candidate_role`.
///
/// Self-changes are always denied, whatever the actor's role: the same code
/// path serves everyone, and an admin must not be able to lock themselves
/// out or silently self-escalate through it.
pub fn can_change_role(
    actor_org_role: Role,
    target_is_self: bool,
    target_current_role: Role,
    candidate_role: Role,
) -> bool {
    actor_org_role == Role::Admin && !target_is_self && candidate_role != target_current_role
}
