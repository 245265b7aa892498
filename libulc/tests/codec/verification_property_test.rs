use libulc::auth::verify_response;
use libulc::codec::{decode_payload, encode_payload};
use libulc::EkRndR2;
use proptest::prelude::*;

proptest! {
    #[test]
    fn payload_roundtrip_up_to_image_size(bytes in prop::collection::vec(any::<u8>(), 0..=80)) {
        prop_assert_eq!(decode_payload(&encode_payload(&bytes)).unwrap(), bytes);
    }

    // Verification accepts exactly the answers whose bytes 1..9 equal the
    // expected value behind the right status byte.
    #[test]
    fn verification_is_exact_match(
        expected in any::<[u8; 8]>(),
        status in any::<u8>(),
        body in prop::collection::vec(any::<u8>(), 0..12),
    ) {
        let mut response = vec![status];
        response.extend_from_slice(&body);

        let accept = status == 0x00 && body.len() >= 8 && body[..8] == expected;
        let outcome = verify_response(&EkRndR2::from_bytes(expected), &response, 0x00);
        prop_assert_eq!(outcome.is_ok(), accept);
    }

    #[test]
    fn any_single_flipped_byte_rejects(expected in any::<[u8; 8]>(), idx in 0usize..8, flip in 1u8..=255) {
        let mut response = vec![0x00];
        response.extend_from_slice(&expected);
        response[1 + idx] ^= flip;
        prop_assert!(verify_response(&EkRndR2::from_bytes(expected), &response, 0x00).is_err());
    }
}
