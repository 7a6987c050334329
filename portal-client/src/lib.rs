//! Browser-client core for the repository administration portal.
//!
//! Authentication runs through an external self-service identity provider
//! (CSRF-protected, server-driven flows); authorization and organization
//! data come from an API gateway. This crate holds everything with protocol
//! or state-machine weight - the flow client, the session gate, the
//! membership store, the invite acceptor, the role predicates, and the
//! screen controllers that sequence them. Rendering, routing, and widget
//! presentation belong to the host application.

pub mod dtos;
pub mod models;
pub mod nav;
pub mod screens;
pub mod services;

pub use client_core::config::Settings;
pub use client_core::error::ClientError;

use client_core::http::credentialed_client;
use services::{AdminDirectory, FlowClient, OrgMembershipStore, RepoCatalog, SessionGate};

/// The assembled client set. All five share one cookie jar, so the
/// credential the provider sets at login rides along on every later call.
pub struct Portal {
    pub flows: FlowClient,
    pub gate: SessionGate,
    pub memberships: OrgMembershipStore,
    pub directory: AdminDirectory,
    pub repositories: RepoCatalog,
}

impl Portal {
    pub fn new(settings: &Settings) -> Result<Self, ClientError> {
        let client = credentialed_client()?;
        Ok(Self {
            flows: FlowClient::new(&client, settings),
            gate: SessionGate::new(&client, settings),
            memberships: OrgMembershipStore::new(&client, settings),
            directory: AdminDirectory::new(&client, settings),
            repositories: RepoCatalog::new(&client, settings),
        })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(&Settings::from_env())
    }
}
