//! Contact form payload and submission state.

use serde::Serialize;

/// Form fields, posted as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactMessage {
    /// Names of required fields left blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Whether every required field is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Submission lifecycle; there is no retry state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// Request in flight.
    Sending,
    /// Accepted by the endpoint or the local stub.
    Sent,
    /// Endpoint rejected the message or was unreachable.
    Failed(String),
}

impl ContactStatus {
    /// Whether the submit button should be disabled.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Status line shown under the form.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending…".to_string()),
            Self::Sent => Some("Thanks! Your message was received.".to_string()),
            Self::Failed(reason) => Some(format!("Message not sent: {reason}")),
        }
    }
}
