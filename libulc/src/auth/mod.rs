// libulc/src/auth/mod.rs
//! Ultralight C mutual authentication, driven in two resumable steps.
//!
//! Phase 1 sends `[0x1A, 0x00]` and captures the card challenge. The caller
//! then hands the challenge to the authority and later resumes with the two
//! artifacts it returns. Phase 2 forwards `EkRnd2_RndR1` and compares the
//! card's answer against the expected `EkRndR2`. Any failure is terminal.

mod state;

pub use state::AuthState;

use log::{debug, warn};
use subtle::ConstantTimeEq;

use crate::protocol::{decode_challenge, decode_verification, Command};
use crate::transport::Transport;
use crate::types::{Challenge, EkRnd2RndR1, EkRndR2};
use crate::{Error, Result};

/// Compare the card's phase-2 answer with the authority's expected value.
///
/// `response` is the raw answer: status byte followed by at least 8 bytes.
/// Bytes 1..9 must equal `expected` exactly.
pub fn verify_response(expected: &EkRndR2, response: &[u8], status: u8) -> Result<()> {
    let observed = decode_verification(response, status)?;
    if bool::from(observed.as_bytes().ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        Err(Error::ArtifactMismatch)
    }
}

/// Handshake state owned by a single session.
#[derive(Debug, Default)]
pub struct Authenticator {
    state: AuthState,
    challenge: Challenge,
}

impl Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// The card challenge, once phase 1 has succeeded.
    pub fn challenge(&self) -> Option<&Challenge> {
        match self.state {
            AuthState::ChallengeReceived
            | AuthState::ResponseAwaited
            | AuthState::ResponseVerified => Some(&self.challenge),
            _ => None,
        }
    }

    fn expect_state(&self, expected: AuthState) -> Result<()> {
        if self.state != expected {
            return Err(Error::InvalidState {
                expected: expected.name(),
                actual: self.state.name(),
            });
        }
        Ok(())
    }

    fn transition(&mut self, next: AuthState) {
        debug!("auth {} -> {}", self.state, next);
        self.state = next;
    }

    fn reject(&mut self, cause: Error) -> Error {
        warn!("authentication rejected in state {}: {}", self.state, cause);
        self.transition(AuthState::Rejected);
        self.challenge.clear();
        Error::AuthenticationRejected {
            source: Box::new(cause),
        }
    }

    /// Phase 1. On failure the state becomes `Rejected`; the caller closes
    /// the link.
    pub fn request_challenge<T: Transport + ?Sized>(
        &mut self,
        link: &mut T,
        status: u8,
    ) -> Result<Challenge> {
        self.expect_state(AuthState::Idle)?;
        self.challenge.clear();
        self.transition(AuthState::ChallengeRequested);

        let command = Command::Authenticate;
        debug!("{:#04x} >> phase 1", command.command_code());
        let challenge = match link
            .transceive(&command.encode())
            .and_then(|resp| decode_challenge(&resp, status))
        {
            Ok(c) => c,
            Err(e) => return Err(self.reject(e)),
        };

        self.challenge = challenge;
        self.transition(AuthState::ChallengeReceived);
        Ok(challenge)
    }

    /// Mark the handshake as suspended on the external authority.
    pub fn await_response(&mut self) -> Result<()> {
        self.expect_state(AuthState::ChallengeReceived)?;
        self.transition(AuthState::ResponseAwaited);
        Ok(())
    }

    /// Phase 2. On any failure the state becomes `Rejected` and the link is
    /// closed before returning.
    pub fn verify<T: Transport + ?Sized>(
        &mut self,
        link: &mut T,
        artifact: &EkRnd2RndR1,
        expected: &EkRndR2,
        status: u8,
    ) -> Result<()> {
        self.expect_state(AuthState::ResponseAwaited)?;

        let command = Command::AuthenticateContinue { artifact: *artifact };
        debug!("{:#04x} >> phase 2", command.command_code());
        let outcome = link
            .transceive(&command.encode())
            .and_then(|resp| verify_response(expected, &resp, status));

        match outcome {
            Ok(()) => {
                self.transition(AuthState::ResponseVerified);
                Ok(())
            }
            Err(e) => {
                let err = self.reject(e);
                if let Err(close_err) = link.close() {
                    debug!("ignoring close error: {}", close_err);
                }
                Err(err)
            }
        }
    }

    /// Force the handshake into `Rejected`, e.g. when the caller aborts.
    pub fn abort(&mut self) {
        if self.state != AuthState::Rejected {
            self.transition(AuthState::Rejected);
        }
        self.challenge.clear();
    }
}
