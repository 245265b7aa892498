// fixtures.rs: commonly used identities, images and authority answers

use libulc::classifier::DetectedTag;
use libulc::transport::MockTransport;
use libulc::{AuthResponse, EkRnd2RndR1, EkRndR2, SessionConfig};

pub fn sample_serial() -> Vec<u8> {
    hex::decode("049AFF").unwrap()
}

pub fn sample_serial_hex() -> &'static str {
    "FF9A04"
}

/// 80 bytes counting up from zero.
pub fn sample_image() -> [u8; 80] {
    let mut image = [0u8; 80];
    for (i, b) in image.iter_mut().enumerate() {
        *b = i as u8;
    }
    image
}

pub fn replacement_image() -> [u8; 80] {
    let mut image = [0u8; 80];
    for (i, b) in image.iter_mut().enumerate() {
        *b = 0xFF - i as u8;
    }
    image
}

pub fn sample_challenge() -> [u8; 8] {
    [0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE]
}

pub fn sample_auth_response() -> AuthResponse {
    AuthResponse::new(
        EkRnd2RndR1::from_bytes([0x42; 16]),
        EkRndR2::from_bytes(*b"AAAAAAAA"),
    )
}

pub fn config() -> SessionConfig {
    SessionConfig::builder().operation_id("op-42").build()
}

pub fn tag(mock: MockTransport) -> DetectedTag<MockTransport> {
    DetectedTag::new(&sample_serial(), mock)
}
