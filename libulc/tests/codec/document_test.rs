#[path = "../common/mod.rs"]
mod common;

use libulc::codec::{decode_payload, encode_payload};
use libulc::{AuthResponse, CardIdentity, Challenge, MemoryImage, ReadResult, WritePreamble};

#[test]
fn serial_renders_big_endian_uppercase() {
    let id = CardIdentity::from_bytes(&[0x04, 0x9A, 0xFF]);
    assert_eq!(id.to_hex(), "FF9A04");

    let seven = CardIdentity::from_bytes(&hex::decode("04a1b2c3d4e580").unwrap());
    assert_eq!(seven.to_hex(), "80E5D4C3B2A104");
}

#[test]
fn read_result_document_shape() {
    let image = MemoryImage::from_bytes(common::fixtures::sample_image());
    let doc = ReadResult::new(
        &CardIdentity::from_bytes(&common::fixtures::sample_serial()),
        "op-42",
        &image,
    );
    let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

    assert_eq!(value["request_type"], 1);
    assert_eq!(value["serial_number"], "FF9A04");
    assert_eq!(value["operation_id"], "op-42");
    let card_data = value["card_data"].as_str().unwrap();
    assert!(!card_data.contains('='));
    assert!(!card_data.contains('+') && !card_data.contains('/'));
    assert_eq!(decode_payload(card_data).unwrap(), image.as_bytes().to_vec());
}

#[test]
fn write_preamble_document_shape() {
    let doc = WritePreamble::new(
        &CardIdentity::from_bytes(&common::fixtures::sample_serial()),
        "op-42",
        &MemoryImage::from_bytes(common::fixtures::sample_image()),
        -1,
        &Challenge::from_bytes(common::fixtures::sample_challenge()),
    );
    let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

    assert_eq!(value["request_type"], 2);
    assert_eq!(value["expiration_date"], 0);
    assert_eq!(value["new_balance"], -1);
    assert_eq!(
        value["rnd_1"].as_str().unwrap(),
        encode_payload(&common::fixtures::sample_challenge())
    );
}

#[test]
fn authority_reply_with_padded_standard_base64() {
    let reply = r#"{"ek_rnd2_rnd_r1":"QkJCQkJCQkJCQkJCQkJCQg==","ek_rnd_r2":"QUFBQUFBQUE="}"#;
    let parsed = AuthResponse::from_json(reply).unwrap();
    assert_eq!(parsed, common::fixtures::sample_auth_response());
}
