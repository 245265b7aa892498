// libulc/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and the tests/ directory script card answers the same way.
#![allow(dead_code)]

use crate::constants::{MEMORY_IMAGE_LEN, READ_CHUNK_LEN, STATUS_ADDITIONAL_FRAME, STATUS_OK};
use crate::transport::mock::MockTransport;

/// The five READ answers that make up `image`.
#[doc(hidden)]
pub fn read_answers(image: &[u8; MEMORY_IMAGE_LEN]) -> Vec<Vec<u8>> {
    image.chunks(READ_CHUNK_LEN).map(|c| c.to_vec()).collect()
}

/// An Ultralight C mock pre-seeded with the READ answers for `image`.
#[doc(hidden)]
pub fn mock_with_image(image: &[u8; MEMORY_IMAGE_LEN]) -> MockTransport {
    let mut mock = MockTransport::ultralight_c();
    for answer in read_answers(image) {
        mock.push_response(answer);
    }
    mock
}

/// Phase-1 answer carrying `challenge`.
#[doc(hidden)]
pub fn challenge_answer(challenge: &[u8; 8]) -> Vec<u8> {
    let mut v = vec![STATUS_ADDITIONAL_FRAME];
    v.extend_from_slice(challenge);
    v
}

/// Phase-2 answer carrying `ek_rnd_r2`.
#[doc(hidden)]
pub fn verification_answer(ek_rnd_r2: &[u8; 8]) -> Vec<u8> {
    let mut v = vec![STATUS_OK];
    v.extend_from_slice(ek_rnd_r2);
    v
}

/// Queue `count` WRITE acknowledgements.
#[doc(hidden)]
pub fn seed_write_acks(mock: &mut MockTransport, count: usize) {
    for _ in 0..count {
        mock.push_response(vec![0x0A]);
    }
}
