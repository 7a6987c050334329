use secrecy::Secret;

use crate::dtos::auth::RegistrationDetails;
use crate::models::{primary_text, Flow, FlowKind};
use crate::nav::{MountGuard, NavTarget};
use crate::services::{FlowClient, FlowStart, Submission};

/// The registration form state machine. Mirrors the login screen, but
/// submission goes through the gateway envelope and success lands on the
/// login screen rather than assuming a session.
pub struct RegisterScreen {
    guard: MountGuard,
    flow: Option<Flow>,
    pub name: String,
    pub email: String,
    error: Option<String>,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self {
            guard: MountGuard::new(),
            flow: None,
            name: String::new(),
            email: String::new(),
            error: None,
        }
    }

    pub fn flow_id(&self) -> Option<&str> {
        self.flow.as_ref().map(|f| f.id.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

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
                self.error = Some("Could not start registration flow.".to_string());
                return None;
            }
        }

        match flows
            .discover_or_continue(FlowKind::Registration, url_flow_id)
            .await
        {
            Ok(FlowStart::Form(flow)) => {
                self.flow = Some(flow);
                None
            }
            Ok(FlowStart::Redirect(url)) => Some(NavTarget::External(url)),
            Err(_) => {
                self.error = Some(if url_flow_id.is_some() {
                    "Failed to load registration form.".to_string()
                } else {
                    "Could not start registration flow.".to_string()
                });
                None
            }
        }
    }

    pub async fn submit(
        &mut self,
        flows: &FlowClient,
        password: Secret<String>,
    ) -> Option<NavTarget> {
        let Some(flow) = self.flow.as_ref() else {
            return None;
        };

        let details = RegistrationDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            password,
        };

        match flows.submit_registration(flow, &details).await {
            Ok(Submission::Complete) => Some(NavTarget::Login),
            Ok(Submission::Invalid(messages)) => {
                self.error = Some(
                    primary_text(&messages)
                        .unwrap_or("Registration failed.")
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
