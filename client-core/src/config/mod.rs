use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

/// Endpoint settings shared by every domain client.
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub identity: IdentitySettings,
    pub gateway: GatewaySettings,
}

/// Identity-provider endpoints (browser-accessible public URL).
#[derive(Deserialize, Clone, Debug)]
pub struct IdentitySettings {
    pub public_url: String,
}

/// API-gateway endpoint. Every call against it carries credentials.
#[derive(Deserialize, Clone, Debug)]
pub struct GatewaySettings {
    pub url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        dotenv().ok();

        let identity_url =
            env::var("PORTAL_IDENTITY_URL").unwrap_or_else(|_| "http://localhost:4433".to_string());
        let gateway_url =
            env::var("PORTAL_GATEWAY_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self {
            identity: IdentitySettings {
                public_url: identity_url,
            },
            gateway: GatewaySettings { url: gateway_url },
        }
    }
}
