pub mod flow;
pub mod identity;
pub mod organization;
pub mod role;

pub use flow::{primary_text, Flow, FlowKind, MessageScope, MessageSeverity, UiMessage};
pub use identity::{Identity, IdentityTraits, Session};
pub use organization::{OrgDetail, OrgMember, Organization};
pub use role::{deserialize_opt_role, Role};
