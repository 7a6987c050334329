//! Provider wire shapes for self-service flows.
//!
//! Only the fields the client reads are modelled; the provider sends many
//! more, all ignored. The CSRF field is located by scanning the form node
//! list for `attributes.name == "csrf_token"`.

use serde::Deserialize;

use crate::models::{MessageScope, MessageSeverity, UiMessage};

/// A flow as returned by `GET /self-service/{login|registration}/flows`.
/// Submission failures return the same shape with messages attached.
#[derive(Debug, Deserialize)]
pub struct FlowResponse {
    pub id: String,
    #[serde(default)]
    pub ui: UiContainer,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiContainer {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub messages: Vec<UiText>,
}

#[derive(Debug, Deserialize)]
pub struct UiNode {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub attributes: UiNodeAttributes,
    #[serde(default)]
    pub messages: Vec<UiText>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiNodeAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct UiText {
    pub text: String,
    #[serde(rename = "type", default)]
    pub severity: TextSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSeverity {
    #[default]
    Error,
    Success,
    Info,
}

impl From<TextSeverity> for MessageSeverity {
    fn from(severity: TextSeverity) -> Self {
        match severity {
            TextSeverity::Error => MessageSeverity::Error,
            TextSeverity::Success => MessageSeverity::Success,
            TextSeverity::Info => MessageSeverity::Info,
        }
    }
}

impl FlowResponse {
    /// The CSRF token carried by the form, when the field is present.
    pub fn csrf_token(&self) -> Option<&str> {
        self.ui
            .nodes
            .iter()
            .find(|node| node.attributes.name.as_deref() == Some("csrf_token"))
            .and_then(|node| node.attributes.value.as_ref())
            .and_then(|value| value.as_str())
    }

    /// Flatten global and per-field messages, globals first.
    pub fn ui_messages(&self) -> Vec<UiMessage> {
        let mut messages: Vec<UiMessage> = self
            .ui
            .messages
            .iter()
            .map(|text| UiMessage {
                scope: MessageScope::Global,
                severity: text.severity.into(),
                text: text.text.clone(),
            })
            .collect();

        for node in &self.ui.nodes {
            let name = node.attributes.name.clone().unwrap_or_default();
            for text in &node.messages {
                messages.push(UiMessage {
                    scope: MessageScope::Field {
                        name: name.clone(),
                        group: node.group.clone(),
                    },
                    severity: text.severity.into(),
                    text: text.text.clone(),
                });
            }
        }

        messages
    }
}
