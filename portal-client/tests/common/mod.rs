//! Test helper module for portal-client integration tests.
//!
//! Spins wiremock doubles for the identity provider and the gateway, and
//! assembles a portal client pointed at them.

#![allow(dead_code)]

use client_core::config::{GatewaySettings, IdentitySettings, Settings};
use portal_client::Portal;
use serde_json::json;
use uuid::Uuid;
use wiremock::MockServer;

pub struct TestPortal {
    pub identity: MockServer,
    pub gateway: MockServer,
    pub portal: Portal,
}

impl TestPortal {
    pub async fn spawn() -> Self {
        let identity = MockServer::start().await;
        let gateway = MockServer::start().await;

        let settings = Settings {
            identity: IdentitySettings {
                public_url: identity.uri(),
            },
            gateway: GatewaySettings {
                url: gateway.uri(),
            },
        };
        let portal = Portal::new(&settings).expect("failed to build portal client");

        Self {
            identity,
            gateway,
            portal,
        }
    }

    /// Settings pointing at the mock servers, for building extra clients.
    pub fn settings(&self) -> Settings {
        Settings {
            identity: IdentitySettings {
                public_url: self.identity.uri(),
            },
            gateway: GatewaySettings {
                url: self.gateway.uri(),
            },
        }
    }
}

pub fn identity_json(id: Uuid, email: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "traits": { "email": email, "name": name }
    })
}

pub fn introspection_json(
    id: Uuid,
    email: &str,
    name: &str,
    role: serde_json::Value,
) -> serde_json::Value {
    json!({
        "status": "success",
        "user": identity_json(id, email, name),
        "role": role
    })
}

pub fn member_json(id: Uuid, email: &str, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "name": email.split('@').next().unwrap_or_default(),
        "role": role
    })
}

pub fn org_json(
    id: &str,
    name: &str,
    created_by: Uuid,
    members: Vec<serde_json::Value>,
) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} workspace"),
        "created_by": created_by,
        "created_at": "2024-06-01T10:00:00Z",
        "Users": members
    })
}

pub fn org_detail_json(
    org: serde_json::Value,
    viewer: Uuid,
    viewer_email: &str,
    viewer_role: &str,
) -> serde_json::Value {
    json!({
        "org": org,
        "role": viewer_role,
        "user": identity_json(viewer, viewer_email, "viewer")
    })
}

/// A provider flow body with the usual identifier/password/csrf nodes.
pub fn flow_json(id: &str, csrf_token: Option<&str>) -> serde_json::Value {
    let mut nodes = vec![
        json!({"group": "default", "attributes": {"name": "identifier", "value": ""}}),
        json!({"group": "password", "attributes": {"name": "password"}}),
    ];
    if let Some(token) = csrf_token {
        nodes.push(json!({
            "group": "default",
            "attributes": {"name": "csrf_token", "value": token}
        }));
    }
    json!({"id": id, "ui": {"nodes": nodes, "messages": []}})
}

/// A flow body rejected with one global message, as the provider returns on
/// bad credentials.
pub fn flow_error_json(id: &str, message: &str) -> serde_json::Value {
    json!({
        "id": id,
        "ui": {
            "nodes": [],
            "messages": [{"text": message, "type": "error"}]
        }
    })
}

pub fn repo_json(id: u64, name: &str, private: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "a repository",
        "private": private,
        "html_url": format!("https://github.com/example/{name}"),
        "updated_at": "2024-06-01T10:00:00Z",
        "language": "Rust"
    })
}
