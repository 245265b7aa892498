// libulc/src/codec/messages.rs

use serde::{Deserialize, Serialize};

use crate::codec::payload::{as_payload, decode_payload};
use crate::types::{CardIdentity, Challenge, EkRnd2RndR1, EkRndR2, MemoryImage};
use crate::Result;

/// `request_type` of a read-result document.
pub const REQUEST_TYPE_READ: u8 = 1;

/// `request_type` of a write-preamble document.
pub const REQUEST_TYPE_WRITE: u8 = 2;

/// Sent after a read-only session: the card's current contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadResult {
    pub request_type: u8,
    pub serial_number: String,
    pub operation_id: String,
    #[serde(with = "as_payload")]
    pub card_data: MemoryImage,
}

impl ReadResult {
    pub fn new(identity: &CardIdentity, operation_id: &str, image: &MemoryImage) -> Self {
        Self {
            request_type: REQUEST_TYPE_READ,
            serial_number: identity.to_hex(),
            operation_id: operation_id.to_string(),
            card_data: *image,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Sent while the handshake is suspended so the authority can compute the
/// phase-2 artifact and the new card contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritePreamble {
    pub request_type: u8,
    pub operation_id: String,
    pub serial_number: String,
    #[serde(with = "as_payload")]
    pub card_data: MemoryImage,
    pub expiration_date: i64,
    pub new_balance: i32,
    #[serde(with = "as_payload")]
    pub rnd_1: Challenge,
}

impl WritePreamble {
    pub fn new(
        identity: &CardIdentity,
        operation_id: &str,
        image: &MemoryImage,
        new_balance: i32,
        challenge: &Challenge,
    ) -> Self {
        Self {
            request_type: REQUEST_TYPE_WRITE,
            operation_id: operation_id.to_string(),
            serial_number: identity.to_hex(),
            card_data: *image,
            expiration_date: 0,
            new_balance,
            rnd_1: *challenge,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The authority's answer to a write preamble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Forwarded to the card in phase 2.
    #[serde(with = "as_payload")]
    pub ek_rnd2_rnd_r1: EkRnd2RndR1,
    /// What the card must answer in phase 2.
    #[serde(with = "as_payload")]
    pub ek_rnd_r2: EkRndR2,
}

impl AuthResponse {
    pub fn new(ek_rnd2_rnd_r1: EkRnd2RndR1, ek_rnd_r2: EkRndR2) -> Self {
        Self {
            ek_rnd2_rnd_r1,
            ek_rnd_r2,
        }
    }

    /// Build from the two encoded strings as handed over by the integration layer.
    pub fn from_encoded(ek_rnd2_rnd_r1: &str, ek_rnd_r2: &str) -> Result<Self> {
        Ok(Self {
            ek_rnd2_rnd_r1: EkRnd2RndR1::try_from(decode_payload(ek_rnd2_rnd_r1)?.as_slice())?,
            ek_rnd_r2: EkRndR2::try_from(decode_payload(ek_rnd_r2)?.as_slice())?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
