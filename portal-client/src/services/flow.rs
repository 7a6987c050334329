//! Self-service flow client.
//!
//! Drives the provider's login/registration flow protocol: flow discovery,
//! CSRF extraction, submission, and validation-error decoding. Login submits
//! directly to the provider; registration is routed through the gateway so it
//! can assign the default platform role on success.

use secrecy::ExposeSecret;
use validator::Validate;

use client_core::config::Settings;
use client_core::error::ClientError;
use client_core::http::Api;

use crate::dtos::auth::{LoginCredentials, RegistrationDetails};
use crate::dtos::flow::FlowResponse;
use crate::dtos::ErrorBody;
use crate::models::{Flow, FlowKind, MessageSeverity, UiMessage};

/// Outcome of flow discovery.
#[derive(Debug)]
pub enum FlowStart {
    /// An existing flow was fetched; render its form.
    Form(Flow),
    /// The provider initiated a fresh browser flow; navigate the whole
    /// browser to this URL. It is opaque - the provider's own UI may be on
    /// the other end.
    Redirect(String),
}

/// Outcome of a flow submission. Validation failures keep the flow alive for
/// resubmission and are not errors.
#[derive(Debug)]
pub enum Submission {
    Complete,
    Invalid(Vec<UiMessage>),
}

pub struct FlowClient {
    identity: Api,
    gateway: Api,
}

impl FlowClient {
    pub fn new(client: &reqwest::Client, settings: &Settings) -> Self {
        Self {
            identity: Api::new(client.clone(), &settings.identity.public_url),
            gateway: Api::new(client.clone(), &settings.gateway.url),
        }
    }

    /// Whether the provider already holds an active session for this
    /// browser. Used by the login/registration screens to bounce
    /// authenticated visitors home.
    pub async fn has_active_session(&self) -> Result<bool, ClientError> {
        let response = self.identity.get("/sessions/whoami").await?;
        Ok(response.status().is_success())
    }

    /// Continue the flow named in the URL, or ask the provider to start a
    /// fresh browser flow and report where it redirected to.
    pub async fn discover_or_continue(
        &self,
        kind: FlowKind,
        url_flow_id: Option<&str>,
    ) -> Result<FlowStart, ClientError> {
        match url_flow_id {
            Some(id) => self.fetch_flow(kind, id).await.map(FlowStart::Form),
            None => self.begin_browser_flow(kind).await.map(FlowStart::Redirect),
        }
    }

    async fn fetch_flow(&self, kind: FlowKind, id: &str) -> Result<Flow, ClientError> {
        let path = format!("/self-service/{}/flows?id={}", kind.path_segment(), id);
        let response = self.identity.get(&path).await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_status(status, ErrorBody::decode(&body)));
        }

        let flow: FlowResponse = serde_json::from_str(&body)?;
        let csrf_token = flow.csrf_token().unwrap_or_default().to_string();
        if csrf_token.is_empty() {
            // Not fatal here: the provider rejects the eventual submission,
            // which surfaces as an ordinary validation failure.
            tracing::warn!(flow_id = %flow.id, "flow form carries no csrf token");
        }

        let messages = flow.ui_messages();
        tracing::debug!(flow_id = %flow.id, kind = kind.path_segment(), "continuing existing flow");

        Ok(Flow {
            id: flow.id,
            kind,
            csrf_token,
            messages,
        })
    }

    async fn begin_browser_flow(&self, kind: FlowKind) -> Result<String, ClientError> {
        let path = format!("/self-service/{}/browser", kind.path_segment());
        let response = self.identity.get(&path).await?;

        // Redirects have already been followed; the effective final URL is
        // the place the whole browser must go next.
        let target = response.url().to_string();
        tracing::debug!(kind = kind.path_segment(), target = %target, "fresh browser flow initiated");
        Ok(target)
    }

    /// Submit login credentials for `flow` directly to the provider.
    ///
    /// Success does not hand the client a session token: the provider sets a
    /// cookie, and the next protected request is the actual proof.
    pub async fn submit_login(
        &self,
        flow: &Flow,
        credentials: &LoginCredentials,
    ) -> Result<Submission, ClientError> {
        let path = format!("/self-service/login?flow={}", flow.id);
        let body = serde_json::json!({
            "method": "password",
            "csrf_token": flow.csrf_token,
            "identifier": credentials.identifier,
            "password": credentials.password.expose_secret(),
        });

        let response = self.identity.post(&path, &body).await?;
        self.decode_submission(response).await
    }

    /// Submit registration details for `flow` through the gateway envelope.
    pub async fn submit_registration(
        &self,
        flow: &Flow,
        details: &RegistrationDetails,
    ) -> Result<Submission, ClientError> {
        if details.validate().is_err() {
            return Ok(Submission::Invalid(vec![UiMessage::global(
                MessageSeverity::Error,
                "Please enter a valid email address.",
            )]));
        }

        let body = serde_json::json!({
            "flow": flow.id,
            "data": {
                "method": "password",
                "csrf_token": flow.csrf_token,
                "traits": {
                    "email": details.email,
                    "name": details.name,
                },
                "password": details.password.expose_secret(),
            },
        });

        let response = self.gateway.post("/api/register", &body).await?;
        self.decode_submission(response).await
    }

    async fn decode_submission(
        &self,
        response: reqwest::Response,
    ) -> Result<Submission, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(Submission::Complete);
        }

        let body = response.text().await?;
        match serde_json::from_str::<FlowResponse>(&body) {
            Ok(flow) => {
                let messages = flow.ui_messages();
                if messages.is_empty() {
                    Err(ClientError::from_status(status, None))
                } else {
                    tracing::debug!(flow_id = %flow.id, count = messages.len(), "submission rejected with validation messages");
                    Ok(Submission::Invalid(messages))
                }
            }
            Err(_) => Err(ClientError::from_status(status, ErrorBody::decode(&body))),
        }
    }
}
