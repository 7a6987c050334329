pub mod admin;
pub mod flow;
pub mod membership;
pub mod policy;
pub mod repos;
pub mod session;

pub use admin::AdminDirectory;
pub use flow::{FlowClient, FlowStart, Submission};
pub use membership::{CreateOutcome, InviteAcceptance, OrgMembershipStore};
pub use repos::{RepoCatalog, RepoCreation, RepoListing};
pub use session::{ProtectedRoute, Resolution, SessionGate};

/// Outcome of a mutating gateway call. A server-side denial is a normal,
/// reportable outcome for a user with a valid session, not an error; only
/// transport failures and lost sessions escape as `ClientError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Rejected { message: String },
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}
