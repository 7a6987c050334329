use crate::dtos::repos::{CreateRepositoryRequest, Repository};
use crate::models::{Identity, Role};
use crate::nav::{MountGuard, NavTarget};
use crate::screens::{Feedback, Phase};
use crate::services::{
    policy, ProtectedRoute, RepoCatalog, RepoCreation, RepoListing, Resolution, SessionGate,
};

/// Ready-state content of the home screen.
#[derive(Debug)]
pub struct HomeView {
    pub identity: Identity,
    pub platform_role: Role,
    /// `None` until the user connects a GitHub account.
    pub repositories: Option<Vec<Repository>>,
    pub can_create_repository: bool,
}

pub struct HomeScreen {
    guard: MountGuard,
    state: Phase<HomeView>,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            guard: MountGuard::new(),
            state: Phase::Loading,
        }
    }

    pub fn state(&self) -> &Phase<HomeView> {
        &self.state
    }

    /// Load the screen. Session introspection and the repository list are
    /// independent, so both are issued concurrently and both settle before
    /// the screen leaves its loading phase. If the session turns out to be
    /// gone the repository result is discarded, never applied.
    pub async fn load(&mut self, gate: &SessionGate, repos: &RepoCatalog) -> Option<NavTarget> {
        if !self.guard.arm() {
            return None;
        }

        let (resolution, listing) =
            futures::join!(gate.resolve(ProtectedRoute::Home), repos.list());

        let session = match resolution {
            Ok(Resolution::Session(session)) => session,
            Ok(Resolution::Unauthenticated) => return Some(NavTarget::Login),
            Err(e) => {
                self.state = Phase::Error(e.user_message());
                return None;
            }
        };

        // A session without a resolved platform role gates as unauthenticated.
        let Some(platform_role) = session.platform_role else {
            tracing::warn!(user_id = %session.identity.id, "session carries no platform role");
            return Some(NavTarget::Login);
        };

        let repositories = match listing {
            Ok(RepoListing::Available(repositories)) => Some(repositories),
            Ok(RepoListing::Unavailable) => None,
            Err(e) => {
                self.state = Phase::Error(e.user_message());
                return None;
            }
        };

        self.state = Phase::Ready(HomeView {
            identity: session.identity,
            platform_role,
            repositories,
            can_create_repository: policy::can_create_repository(platform_role),
        });
        None
    }

    /// Create a repository and prepend it to the listing. The control behind
    /// this is only rendered when `can_create_repository` is true; the
    /// server still has the final say.
    pub async fn create_repository(
        &mut self,
        repos: &RepoCatalog,
        request: CreateRepositoryRequest,
    ) -> Feedback {
        match repos.create(&request).await {
            Ok(RepoCreation::Created(repository)) => {
                let name = repository.name.clone();
                if let Phase::Ready(view) = &mut self.state {
                    view.repositories
                        .get_or_insert_with(Vec::new)
                        .insert(0, repository);
                }
                Feedback::Success(format!("Repository {name} created successfully."))
            }
            Ok(RepoCreation::Rejected { message }) => Feedback::Error(message),
            Err(e) => Feedback::Error(e.user_message()),
        }
    }
}
