//! Screen controllers: the headless state machines behind each route.
//!
//! Every protected screen follows the same shape: a mount guard so loading
//! fires once per mount, an explicit loading phase while its initial fetches
//! are outstanding, session resolution before any dependent data, and a
//! returned `NavTarget` when the screen must be left instead of rendered.

pub mod accept_invite;
pub mod admin;
pub mod home;
pub mod login;
pub mod org_detail;
pub mod organizations;
pub mod register;

pub use accept_invite::{AcceptPhase, AcceptResult, InviteAcceptor};
pub use admin::AdminScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use org_detail::OrgDetailScreen;
pub use organizations::OrganizationsScreen;
pub use register::RegisterScreen;

/// Lifecycle of a screen whose initial content depends on outstanding
/// fetches. Nothing protected renders before `Ready`.
#[derive(Debug)]
pub enum Phase<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Phase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Phase::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of a user-triggered mutation, for the host to present as a
/// dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}
