//! Checkout state machine.

use serde::{Deserialize, Serialize};

/// The state of one checkout in its lifecycle.
///
/// State transitions:
/// ```text
/// Idle ──► Submitting ──┬──► Succeeded ──────┬──► Idle
///                       └──► PartialFailure ─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutState {
    /// No checkout is running.
    #[default]
    Idle,

    /// Sale requests are in flight.
    Submitting,

    /// Every sale was recorded and the cart was cleared.
    Succeeded,

    /// At least one sale failed; the cart was kept for retry.
    PartialFailure,
}

impl CheckoutState {
    /// Returns true if a checkout can start from this state.
    pub fn can_submit(&self) -> bool {
        matches!(self, CheckoutState::Idle)
    }

    /// Returns true if the submission can finish from this state.
    pub fn can_finish(&self) -> bool {
        matches!(self, CheckoutState::Submitting)
    }

    /// Returns true if the outcome has been reported and the machine can
    /// return to idle.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CheckoutState::Succeeded | CheckoutState::PartialFailure
        )
    }

    /// Returns true if moving to `next` is a legal transition.
    pub fn can_transition_to(&self, next: CheckoutState) -> bool {
        match next {
            CheckoutState::Idle => self.is_terminal(),
            CheckoutState::Submitting => self.can_submit(),
            CheckoutState::Succeeded | CheckoutState::PartialFailure => self.can_finish(),
        }
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "Idle",
            CheckoutState::Submitting => "Submitting",
            CheckoutState::Succeeded => "Succeeded",
            CheckoutState::PartialFailure => "PartialFailure",
        }
    }
}

impl std::fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CheckoutState; 4] = [
        CheckoutState::Idle,
        CheckoutState::Submitting,
        CheckoutState::Succeeded,
        CheckoutState::PartialFailure,
    ];

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(CheckoutState::default(), CheckoutState::Idle);
    }

    #[test]
    fn test_can_submit() {
        assert!(CheckoutState::Idle.can_submit());
        assert!(!CheckoutState::Submitting.can_submit());
        assert!(!CheckoutState::Succeeded.can_submit());
        assert!(!CheckoutState::PartialFailure.can_submit());
    }

    #[test]
    fn test_can_finish() {
        assert!(!CheckoutState::Idle.can_finish());
        assert!(CheckoutState::Submitting.can_finish());
        assert!(!CheckoutState::Succeeded.can_finish());
        assert!(!CheckoutState::PartialFailure.can_finish());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!CheckoutState::Idle.is_terminal());
        assert!(!CheckoutState::Submitting.is_terminal());
        assert!(CheckoutState::Succeeded.is_terminal());
        assert!(CheckoutState::PartialFailure.is_terminal());
    }

    #[test]
    fn test_transition_table() {
        use CheckoutState::*;
        let legal = [
            (Idle, Submitting),
            (Submitting, Succeeded),
            (Submitting, PartialFailure),
            (Succeeded, Idle),
            (PartialFailure, Idle),
        ];

        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    legal.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CheckoutState::Idle.to_string(), "Idle");
        assert_eq!(CheckoutState::Submitting.to_string(), "Submitting");
        assert_eq!(CheckoutState::Succeeded.to_string(), "Succeeded");
        assert_eq!(CheckoutState::PartialFailure.to_string(), "PartialFailure");
    }

    #[test]
    fn test_serialization() {
        let state = CheckoutState::Submitting;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CheckoutState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
