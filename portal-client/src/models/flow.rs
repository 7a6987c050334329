//! Self-service flow model: one in-progress login or registration operation,
//! CSRF-protected and identified by an opaque provider id.

/// Which self-service operation a flow drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Login,
    Registration,
}

impl FlowKind {
    /// Path segment used by the provider's self-service endpoints.
    pub fn path_segment(&self) -> &'static str {
        match self {
            FlowKind::Login => "login",
            FlowKind::Registration => "registration",
        }
    }
}

/// One in-progress flow. Lives only as long as the page that discovered it;
/// a reload always re-discovers or re-creates a flow.
#[derive(Debug, Clone)]
pub struct Flow {
    pub id: String,
    pub kind: FlowKind,
    /// Opaque CSRF token, submitted verbatim. May be empty when the provider
    /// form did not carry the field; submission then fails server-side as a
    /// validation failure.
    pub csrf_token: String,
    pub messages: Vec<UiMessage>,
}

/// Where a provider message attaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageScope {
    Global,
    Field { name: String, group: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    Error,
    Info,
    Success,
}

/// One validation/info message from the provider's form description.
#[derive(Debug, Clone, PartialEq)]
pub struct UiMessage {
    pub scope: MessageScope,
    pub severity: MessageSeverity,
    pub text: String,
}

impl UiMessage {
    pub fn global(severity: MessageSeverity, text: impl Into<String>) -> Self {
        UiMessage {
            scope: MessageScope::Global,
            severity,
            text: text.into(),
        }
    }
}

/// The single message surfaced to the user when several exist at once:
/// global messages win, then the `password` field group, then whichever
/// field message came first.
pub fn primary_text(messages: &[UiMessage]) -> Option<&str> {
    if let Some(m) = messages
        .iter()
        .find(|m| matches!(m.scope, MessageScope::Global))
    {
        return Some(&m.text);
    }
    if let Some(m) = messages
        .iter()
        .find(|m| matches!(&m.scope, MessageScope::Field { group, .. } if group == "password"))
    {
        return Some(&m.text);
    }
    messages
        .iter()
        .find(|m| matches!(m.scope, MessageScope::Field { .. }))
        .map(|m| m.text.as_str())
}
