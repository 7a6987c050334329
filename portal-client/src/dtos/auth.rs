use secrecy::Secret;
use serde::Deserialize;
use validator::Validate;

use crate::models::{deserialize_opt_role, Identity, Role};

/// Credentials entered on the login form. The password is wrapped so it
/// never lands in logs; it is exposed only at submission time.
pub struct LoginCredentials {
    pub identifier: String,
    pub password: Secret<String>,
}

/// Details entered on the registration form.
#[derive(Validate)]
pub struct RegistrationDetails {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: Secret<String>,
}

/// Session introspection response from `GET /home` / `GET /protected`.
#[derive(Debug, Deserialize)]
pub struct IntrospectionResponse {
    pub user: Identity,
    #[serde(default, deserialize_with = "deserialize_opt_role")]
    pub role: Option<Role>,
}

/// Response from `POST /logout`. The client must navigate the whole browser
/// to `logout_url` to complete provider-side logout.
#[derive(Debug, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub logout_url: Option<String>,
}
