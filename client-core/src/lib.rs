//! client-core: Shared infrastructure for the portal client crates.
pub mod config;
pub mod error;
pub mod http;
pub mod observability;

pub use reqwest;
pub use secrecy;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use validator;
