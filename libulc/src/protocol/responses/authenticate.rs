// libulc/src/protocol/responses/authenticate.rs

use crate::constants::{AUTH_RESPONSE_MIN_LEN, CHALLENGE_LEN, EK_RNDR2_LEN};
use crate::protocol::parser;
use crate::types::{Challenge, EkRndR2};
use crate::Result;

/// Decode the phase-1 answer: `status || Rnd1(8)`.
/// Layout check: status byte first, then at least 8 more bytes.
pub fn decode_challenge(data: &[u8], status: u8) -> Result<Challenge> {
    parser::expect_status(data, status)?;
    parser::ensure_len(data, AUTH_RESPONSE_MIN_LEN)?;
    Challenge::try_from(parser::slice_at(data, 1, CHALLENGE_LEN)?)
}

/// Decode the phase-2 answer: `status || EkRndR2(8)`.
pub fn decode_verification(data: &[u8], status: u8) -> Result<EkRndR2> {
    parser::expect_status(data, status)?;
    parser::ensure_len(data, AUTH_RESPONSE_MIN_LEN)?;
    EkRndR2::try_from(parser::slice_at(data, 1, EK_RNDR2_LEN)?)
}
