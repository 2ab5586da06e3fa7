//! Login flow status.
//!
//! ```text
//! Idle -> Authenticating -> ResolvingMembership -> SessionReady
//!                                      |                 ^
//!                                      v                 |
//!                             AwaitingClinicChoice ------+
//! ```
//!
//! Any non-terminal status falls back to `Idle` when the attempt fails.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginStatus {
    Idle,
    Authenticating,
    ResolvingMembership,
    AwaitingClinicChoice,
    SessionReady,
}

impl StateMachine for LoginStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use LoginStatus::*;
        match self {
            Idle => vec![Authenticating],
            Authenticating => vec![ResolvingMembership, Idle],
            ResolvingMembership => vec![SessionReady, AwaitingClinicChoice, Idle],
            AwaitingClinicChoice => vec![SessionReady, Idle],
            SessionReady => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LoginStatus::*;

    const ALL: [LoginStatus; 5] = [
        Idle,
        Authenticating,
        ResolvingMembership,
        AwaitingClinicChoice,
        SessionReady,
    ];

    #[test]
    fn single_clinic_path_skips_choice() {
        let status = Idle
            .transition_to(Authenticating)
            .and_then(|s| s.transition_to(ResolvingMembership))
            .and_then(|s| s.transition_to(SessionReady));
        assert_eq!(status, Ok(SessionReady));
    }

    #[test]
    fn multi_clinic_path_goes_through_choice() {
        let status = ResolvingMembership
            .transition_to(AwaitingClinicChoice)
            .and_then(|s| s.transition_to(SessionReady));
        assert_eq!(status, Ok(SessionReady));
    }

    #[test]
    fn session_ready_is_the_only_terminal_status() {
        for status in ALL {
            assert_eq!(status.is_terminal(), status == SessionReady, "{:?}", status);
        }
    }

    #[test]
    fn every_non_idle_non_terminal_status_can_fail_back_to_idle() {
        for status in [Authenticating, ResolvingMembership, AwaitingClinicChoice] {
            assert!(status.can_transition_to(&Idle), "{:?}", status);
        }
    }

    #[test]
    fn cannot_skip_authentication() {
        assert!(Idle.transition_to(SessionReady).is_err());
        assert!(Idle.transition_to(AwaitingClinicChoice).is_err());
        assert!(Authenticating.transition_to(SessionReady).is_err());
    }
}
