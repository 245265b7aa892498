// libulc/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::types::TechId;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses in order. A queued `Err` simulates a transceive failure.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<std::result::Result<Vec<u8>, String>>,
    pub techs: Vec<TechId>,
    pub max_transceive_length: usize,
    pub connected: bool,
    pub connect_calls: usize,
    pub close_calls: usize,
    pub timeout_ms: Option<u64>,
    /// Testing hook: make the next `connect` fail.
    pub fail_connect: bool,
    /// Testing hook: make every `close` fail after marking the link closed.
    pub fail_close: bool,
}

impl MockTransport {
    pub fn new(techs: Vec<TechId>, max_transceive_length: usize) -> Self {
        Self {
            techs,
            max_transceive_length,
            ..Default::default()
        }
    }

    /// A well-formed Ultralight C tag as reported by a typical NfcA stack.
    pub fn ultralight_c() -> Self {
        Self::new(vec![TechId::NfcA, TechId::MifareUltralight], 253)
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    pub fn push_failure(&mut self, message: &str) {
        self.responses.push(Err(message.to_string()));
    }
}

impl Transport for MockTransport {
    fn connect(&mut self) -> Result<()> {
        self.connect_calls += 1;
        if self.fail_connect {
            self.fail_connect = false;
            return Err(Error::Transport("connect refused".into()));
        }
        self.connected = true;
        Ok(())
    }

    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        self.sent.push(frame.to_vec());
        if self.responses.is_empty() {
            return Err(Error::Transport("tag lost".into()));
        }
        self.responses.remove(0).map_err(Error::Transport)
    }

    fn close(&mut self) -> Result<()> {
        self.close_calls += 1;
        self.connected = false;
        if self.fail_close {
            return Err(Error::Transport("close failed".into()));
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn max_transceive_length(&self) -> usize {
        self.max_transceive_length
    }

    fn tech_capabilities(&self) -> Vec<TechId> {
        self.techs.clone()
    }

    fn set_timeout(&mut self, timeout_ms: u64) -> Result<()> {
        self.timeout_ms = Some(timeout_ms);
        Ok(())
    }
}
