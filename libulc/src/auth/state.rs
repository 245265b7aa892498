// libulc/src/auth/state.rs

use serde::{Deserialize, Serialize};

/// Progress of the three-pass handshake.
///
/// `ResponseAwaited` is the suspension point: the card link stays open while
/// the authority computes the phase-2 artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Idle,
    ChallengeRequested,
    ChallengeReceived,
    ResponseAwaited,
    ResponseVerified,
    Rejected,
}

impl AuthState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ChallengeRequested => "challenge_requested",
            Self::ChallengeReceived => "challenge_received",
            Self::ResponseAwaited => "response_awaited",
            Self::ResponseVerified => "response_verified",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
