//! Session lifecycle status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the session is in its login lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No token held.
    Anonymous,
    /// A login request is in flight.
    Pending,
    /// A token is held.
    Authenticated,
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Anonymous, Pending)
                | (Pending, Authenticated)
                | (Pending, Anonymous)
                | (Authenticated, Anonymous)
                | (Authenticated, Pending)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Anonymous => vec![Pending],
            Pending => vec![Authenticated, Anonymous],
            Authenticated => vec![Anonymous, Pending],
        }
    }
}
