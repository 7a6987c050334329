//! Credentialed HTTP plumbing shared by the domain clients.
//!
//! Both the identity provider and the gateway authenticate with cookies.
//! Every domain client wraps the one cookie-carrying client built here;
//! nothing talks to either upstream without it.

use crate::error::ClientError;
use reqwest::Client;
use serde::Serialize;

/// Build the shared HTTP client with cookie-based credential attachment.
pub fn credentialed_client() -> Result<Client, ClientError> {
    let client = Client::builder().cookie_store(true).build()?;
    Ok(client)
}

/// A base URL plus the shared client. Domain clients wrap one of these per
/// upstream (identity provider, gateway).
#[derive(Clone)]
pub struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Send a GET request. Non-2xx responses are returned for the caller to
    /// branch on; only transport failures error here.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        let url = self.url(path);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "GET request failed");
            ClientError::Transport(e)
        })?;

        Ok(response)
    }

    /// Send a POST request with a JSON body.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "POST request failed");
            ClientError::Transport(e)
        })?;

        Ok(response)
    }
}
