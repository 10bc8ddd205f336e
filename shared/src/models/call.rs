//! Staff Call Models

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Per-seat staff-call state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallState {
    /// Timestamp of the last allowed call, if any
    pub last_call_at: Option<Timestamp>,
}

/// Outcome of a staff-call attempt
///
/// A rejected attempt does NOT update the call state — there is no
/// sliding-window reset on repeated presses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CallOutcome {
    Allowed,
    Throttled { remaining_seconds: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_state_default() {
        assert_eq!(CallState::default().last_call_at, None);
    }

    #[test]
    fn test_outcome_serialize() {
        let json = serde_json::to_string(&CallOutcome::Throttled {
            remaining_seconds: 20,
        })
        .unwrap();
        assert!(json.contains("\"outcome\":\"throttled\""));
        assert!(json.contains("\"remaining_seconds\":20"));
    }
}
