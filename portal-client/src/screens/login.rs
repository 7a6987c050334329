use secrecy::Secret;

use crate::dtos::auth::LoginCredentials;
use crate::models::{primary_text, Flow, FlowKind};
use crate::nav::{MountGuard, NavTarget};
use crate::services::{FlowClient, FlowStart, Submission};

/// The login form state machine.
///
/// Field values live here so a failed submission keeps the flow id and the
/// entered identifier intact for resubmission.
pub struct LoginScreen {
    guard: MountGuard,
    flow: Option<Flow>,
    pub identifier: String,
    error: Option<String>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            guard: MountGuard::new(),
            flow: None,
            identifier: String::new(),
            error: None,
        }
    }

    pub fn flow_id(&self) -> Option<&str> {
        self.flow.as_ref().map(|f| f.id.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Runs once per mount: bounce authenticated visitors home, otherwise
    /// continue the flow named in the URL or start a fresh one.
    pub async fn start(
        &mut self,
        flows: &FlowClient,
        url_flow_id: Option<&str>,
    ) -> Option<NavTarget> {
        if !self.guard.arm() {
            return None;
        }

        match flows.has_active_session().await {
            Ok(true) => return Some(NavTarget::Home),
            Ok(false) => {}
            Err(_) => {
                self.error = Some("Could not start login flow.".to_string());
                return None;
            }
        }

        match flows.discover_or_continue(FlowKind::Login, url_flow_id).await {
            Ok(FlowStart::Form(flow)) => {
                self.flow = Some(flow);
                None
            }
            Ok(FlowStart::Redirect(url)) => Some(NavTarget::External(url)),
            Err(_) => {
                self.error = Some(if url_flow_id.is_some() {
                    "Failed to load login flow.".to_string()
                } else {
                    "Could not start login flow.".to_string()
                });
                None
            }
        }
    }

    /// Submit the entered credentials. On validation failure the flow stays
    /// alive and the provider's message is surfaced inline.
    pub async fn submit(
        &mut self,
        flows: &FlowClient,
        password: Secret<String>,
    ) -> Option<NavTarget> {
        let Some(flow) = self.flow.as_ref() else {
            self.error = Some("No login flow found.".to_string());
            return None;
        };

        let credentials = LoginCredentials {
            identifier: self.identifier.clone(),
            password,
        };

        match flows.submit_login(flow, &credentials).await {
            Ok(Submission::Complete) => Some(NavTarget::Home),
            Ok(Submission::Invalid(messages)) => {
                self.error = Some(
                    primary_text(&messages)
                        .unwrap_or("Login failed. Check your credentials.")
                        .to_string(),
                );
                None
            }
            Err(e) => {
                self.error = Some(e.user_message());
                None
            }
        }
    }
}
