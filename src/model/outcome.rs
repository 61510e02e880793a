use serde::{Deserialize, Serialize};

/// Result of feeding one event to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    Applied,
    /// A gate refused the event.
    Rejected { reason: String },
    /// Stale, repeated or unconfigured; nothing happened.
    Ignored { reason: String },
}

impl EventOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        EventOutcome::Rejected {
            reason: reason.into(),
        }
    }

    pub fn ignored(reason: impl Into<String>) -> Self {
        EventOutcome::Ignored {
            reason: reason.into(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, EventOutcome::Applied)
    }
}
