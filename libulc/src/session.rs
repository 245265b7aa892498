// libulc/src/session.rs
//! One tap, one session: identity, open link, memory image and handshake
//! state travel together in a single value.
//!
//! Read flow: [`Session::open`] -> [`Session::read`] -> [`Session::read_result`].
//! Write flow: `open` -> `read(true)` -> [`Session::begin_authentication`]
//! -> (authority round trip) -> [`Session::complete_authentication`]
//! -> [`Session::write`]. Every failure closes the link; nothing is retried.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthState, Authenticator};
use crate::card;
use crate::classifier::{self, DetectedTag};
use crate::codec::payload::{as_payload, decode_payload};
use crate::codec::{AuthResponse, ReadResult, WritePreamble};
use crate::config::SessionConfig;
use crate::transport::Transport;
use crate::types::{CardIdentity, Challenge, MemoryImage};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Detected,
    Open,
    Closed,
}

impl Lifecycle {
    fn name(&self) -> &'static str {
        match self {
            Self::Detected => "detected",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Snapshot of a session suspended on the external authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAuthentication {
    pub serial_number: String,
    #[serde(with = "as_payload")]
    pub challenge: Challenge,
    pub state: AuthState,
}

pub struct Session<T: Transport> {
    identity: CardIdentity,
    link: T,
    image: MemoryImage,
    auth: Authenticator,
    config: SessionConfig,
    lifecycle: Lifecycle,
}

impl<T: Transport> Session<T> {
    /// Classify the tag and bind it to a new session. No I/O happens here.
    pub fn open(tag: DetectedTag<T>, config: SessionConfig) -> Result<Self> {
        let accepted = classifier::classify(tag, config.admission_frame_size())?;
        info!("session opened for tag {}", accepted.identity);
        Ok(Self {
            identity: accepted.identity,
            link: accepted.link,
            image: MemoryImage::zeroed(),
            auth: Authenticator::new(),
            config,
            lifecycle: Lifecycle::Detected,
        })
    }

    pub fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    pub fn image(&self) -> &MemoryImage {
        &self.image
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth.state()
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.auth.challenge()
    }

    pub fn is_closed(&self) -> bool {
        self.lifecycle == Lifecycle::Closed
    }

    /// Borrow the underlying link, e.g. to inspect a mock in tests.
    pub fn link(&self) -> &T {
        &self.link
    }

    /// Snapshot of the suspended handshake, if the session is waiting on the authority.
    pub fn pending(&self) -> Option<PendingAuthentication> {
        if self.auth.state() != AuthState::ResponseAwaited {
            return None;
        }
        self.auth.challenge().map(|c| PendingAuthentication {
            serial_number: self.identity.to_hex(),
            challenge: *c,
            state: self.auth.state(),
        })
    }

    fn expect_lifecycle(&self, expected: Lifecycle) -> Result<()> {
        if self.lifecycle != expected {
            return Err(Error::InvalidState {
                expected: expected.name(),
                actual: self.lifecycle.name(),
            });
        }
        Ok(())
    }

    fn connect(&mut self) -> Result<()> {
        self.link.connect()?;
        self.lifecycle = Lifecycle::Open;
        if let Some(timeout_ms) = self.config.transceive_timeout_ms {
            self.link.set_timeout(timeout_ms)?;
        }
        Ok(())
    }

    /// Close the link, ignoring close-time errors.
    fn close(&mut self) {
        if self.lifecycle == Lifecycle::Closed {
            return;
        }
        if let Err(e) = self.link.close() {
            debug!("ignoring close error for tag {}: {}", self.identity, e);
        }
        self.lifecycle = Lifecycle::Closed;
        info!("session closed for tag {}", self.identity);
    }

    /// Fail the session: close the link and hand back `err`.
    fn fail(&mut self, err: Error) -> Error {
        warn!("session for tag {} failed: {}", self.identity, err);
        self.close();
        err
    }

    /// Connect and load the 80-byte data window. With `keep_open` the link
    /// stays connected for a following authentication and write.
    pub fn read(&mut self, keep_open: bool) -> Result<&MemoryImage> {
        self.expect_lifecycle(Lifecycle::Detected)?;

        if let Err(e) = self.connect() {
            return Err(self.fail(e));
        }

        match card::read_image(&mut self.link) {
            Ok(image) => self.image = image,
            Err(e) => return Err(self.fail(e)),
        }

        if !keep_open {
            self.close();
        }
        Ok(&self.image)
    }

    /// Document reporting the current memory image.
    pub fn read_result(&self) -> ReadResult {
        ReadResult::new(&self.identity, &self.config.operation_id, &self.image)
    }

    /// Run phase 1 and suspend on the authority. The returned preamble
    /// carries the challenge the authority needs; the link stays open.
    pub fn begin_authentication(&mut self, new_balance: i32) -> Result<WritePreamble> {
        self.expect_lifecycle(Lifecycle::Open)?;

        let challenge = match self
            .auth
            .request_challenge(&mut self.link, self.config.challenge_status)
        {
            Ok(c) => c,
            // Out-of-order call: nothing was sent, the handshake is untouched.
            Err(e @ Error::InvalidState { .. }) => return Err(e),
            Err(e) => return Err(self.fail(e)),
        };
        self.auth.await_response()?;

        Ok(WritePreamble::new(
            &self.identity,
            &self.config.operation_id,
            &self.image,
            new_balance,
            &challenge,
        ))
    }

    /// Resume with the authority's artifacts and run phase 2.
    pub fn complete_authentication(&mut self, response: &AuthResponse) -> Result<()> {
        self.expect_lifecycle(Lifecycle::Open)?;

        let outcome = self.auth.verify(
            &mut self.link,
            &response.ek_rnd2_rnd_r1,
            &response.ek_rnd_r2,
            self.config.verification_status,
        );
        if let Err(e) = outcome {
            if let Error::InvalidState { .. } = e {
                return Err(e);
            }
            // The authenticator already closed the link.
            self.lifecycle = Lifecycle::Closed;
            warn!("session for tag {} failed: {}", self.identity, e);
            return Err(e);
        }
        Ok(())
    }

    /// Tear down the write flow before any page is written.
    fn abort_write(&mut self, cause: Error) -> Error {
        self.auth.abort();
        self.fail(Error::WriteAborted {
            source: Box::new(cause),
        })
    }

    /// Decode `card_data` and write it to the card. Always closes the link.
    pub fn write(&mut self, card_data: &str) -> Result<()> {
        let image = decode_payload(card_data)
            .and_then(|bytes| MemoryImage::try_from(bytes.as_slice()));
        match image {
            Ok(image) => self.write_image(image),
            Err(e) if self.lifecycle == Lifecycle::Open => Err(self.abort_write(e)),
            Err(e) => Err(e),
        }
    }

    /// Write a replacement image after a verified handshake. Always closes the link.
    pub fn write_image(&mut self, image: MemoryImage) -> Result<()> {
        self.expect_lifecycle(Lifecycle::Open)?;
        if self.auth.state() != AuthState::ResponseVerified {
            let err = Error::InvalidState {
                expected: AuthState::ResponseVerified.name(),
                actual: self.auth.state().name(),
            };
            return Err(self.abort_write(err));
        }

        self.image = image;
        let outcome = card::write_image(&mut self.link, &self.image);
        self.close();
        outcome
    }

    /// Abandon the session from any state, e.g. when the authority timed out.
    pub fn abort(&mut self) {
        self.auth.abort();
        self.close();
    }

    /// Read-only flow in one call. Returns `(serial_number, read_result_json)`.
    pub fn process_read(tag: DetectedTag<T>, config: SessionConfig) -> Result<(String, String)> {
        let mut session = Self::open(tag, config)?;
        session.read(false)?;
        let json = session.read_result().to_json()?;
        Ok((session.identity.to_hex(), json))
    }

    /// First half of the write flow: open, read, run phase 1. Returns the
    /// suspended session and the write-preamble JSON for the authority.
    pub fn process_write(
        tag: DetectedTag<T>,
        config: SessionConfig,
        new_balance: i32,
    ) -> Result<(Self, String)> {
        let mut session = Self::open(tag, config)?;
        session.read(true)?;
        let preamble = session.begin_authentication(new_balance)?;
        match preamble.to_json() {
            Ok(json) => Ok((session, json)),
            Err(e) => {
                session.abort();
                Err(e)
            }
        }
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        if self.lifecycle == Lifecycle::Open {
            self.auth.abort();
            self.close();
        }
    }
}
