//! Session gate: decides whether a protected route may load, and with which
//! platform role.

use client_core::config::Settings;
use client_core::error::ClientError;
use client_core::http::Api;

use crate::dtos::auth::{IntrospectionResponse, LogoutResponse};
use crate::dtos::ErrorBody;
use crate::models::Session;

/// Which introspection endpoint a protected route resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedRoute {
    /// The main dashboard (`GET /home`).
    Home,
    /// The platform admin screen (`GET /protected`).
    Admin,
}

impl ProtectedRoute {
    fn introspection_path(&self) -> &'static str {
        match self {
            ProtectedRoute::Home => "/home",
            ProtectedRoute::Admin => "/protected",
        }
    }
}

/// Result of a session resolution. Anything short of a decodable 2xx is
/// `Unauthenticated`; only transport failures are errors.
#[derive(Debug)]
pub enum Resolution {
    Session(Session),
    Unauthenticated,
}

pub struct SessionGate {
    gateway: Api,
}

impl SessionGate {
    pub fn new(client: &reqwest::Client, settings: &Settings) -> Self {
        Self {
            gateway: Api::new(client.clone(), &settings.gateway.url),
        }
    }

    /// Resolve the session for one protected screen. Called exactly once per
    /// mount; the screen's mount guard enforces that.
    pub async fn resolve(&self, route: ProtectedRoute) -> Result<Resolution, ClientError> {
        let response = self.gateway.get(route.introspection_path()).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(route = ?route, status = %status, "introspection rejected");
            return Ok(Resolution::Unauthenticated);
        }

        let body = response.text().await?;
        match serde_json::from_str::<IntrospectionResponse>(&body) {
            Ok(introspection) => Ok(Resolution::Session(Session {
                identity: introspection.user,
                platform_role: introspection.role,
            })),
            Err(e) => {
                // A malformed introspection body gates exactly like a 401.
                tracing::warn!(route = ?route, error = %e, "undecodable introspection response");
                Ok(Resolution::Unauthenticated)
            }
        }
    }

    /// End the session. Returns the provider logout URL the whole browser
    /// must be navigated to for provider-side logout to complete.
    pub async fn logout(&self) -> Result<String, ClientError> {
        let response = self.gateway.post("/logout", &serde_json::json!({})).await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_status(status, ErrorBody::decode(&body)));
        }

        let logout: LogoutResponse = serde_json::from_str(&body)?;
        match logout.logout_url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ClientError::unexpected(anyhow::anyhow!(
                "logout response carried no logout_url"
            ))),
        }
    }
}
