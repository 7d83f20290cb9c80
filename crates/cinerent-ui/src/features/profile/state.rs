//! Own-profile edits.

use crate::core::error::Outcome;
use crate::core::message::MessageState;
use crate::core::session::Session;

/// Confirmation shown after the token pair was renewed.
pub const SESSION_RENEWED: &str = "Session renewed.";

/// Message line for a manual session renewal.
#[must_use]
pub fn renewal_message(outcome: &Outcome<Session>) -> MessageState {
    MessageState::from_outcome(outcome, |_| SESSION_RENEWED.to_string())
}

/// Field changed by a profile update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    /// Display name.
    Name,
    /// Password.
    Password,
}

impl ProfileField {
    /// Confirmation shown after a successful update.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Name => "Name updated.",
            Self::Password => "Password updated.",
        }
    }

    /// `(name, password)` arguments for the update call.
    #[must_use]
    pub const fn arguments(self, value: &str) -> (Option<&str>, Option<&str>) {
        match self {
            Self::Name => (Some(value), None),
            Self::Password => (None, Some(value)),
        }
    }
}
