// libulc/src/config.rs
//! Per-session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_TRANSCEIVE_TIMEOUT_MS, MIN_FRAME_SIZE, STATUS_ADDITIONAL_FRAME, STATUS_OK,
};

/// Settings applied to every session opened with this configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Smallest link-layer frame size the classifier accepts. Values below
    /// one READ answer (16 bytes) are raised to 16.
    pub min_frame_size: usize,
    /// Link timeout set right after connecting. `None` keeps the transport default.
    pub transceive_timeout_ms: Option<u64>,
    /// Leading byte of a valid phase-1 response.
    pub challenge_status: u8,
    /// Leading byte of a valid phase-2 response.
    pub verification_status: u8,
    /// Opaque operation identifier copied into every outbound document.
    pub operation_id: String,
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::new()
    }

    /// Admission floor actually applied by the classifier.
    pub fn admission_frame_size(&self) -> usize {
        self.min_frame_size.max(MIN_FRAME_SIZE)
    }

    pub fn transceive_timeout(&self) -> Option<Duration> {
        self.transceive_timeout_ms.map(crate::utils::ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_frame_size: MIN_FRAME_SIZE,
            transceive_timeout_ms: Some(DEFAULT_TRANSCEIVE_TIMEOUT_MS),
            challenge_status: STATUS_ADDITIONAL_FRAME,
            verification_status: STATUS_OK,
            operation_id: String::new(),
        }
    }
}

pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
        }
    }

    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.config.operation_id = id.into();
        self
    }

    pub fn min_frame_size(mut self, size: usize) -> Self {
        self.config.min_frame_size = size.max(MIN_FRAME_SIZE);
        self
    }

    pub fn transceive_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.config.transceive_timeout_ms = timeout_ms;
        self
    }

    pub fn challenge_status(mut self, status: u8) -> Self {
        self.config.challenge_status = status;
        self
    }

    pub fn verification_status(mut self, status: u8) -> Self {
        self.config.verification_status = status;
        self
    }

    pub fn build(self) -> SessionConfig {
        self.config
    }
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
