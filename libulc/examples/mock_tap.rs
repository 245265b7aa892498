// Runs a read tap and a write tap against a scripted MockTransport.
//
//     RUST_LOG=debug cargo run --example mock_tap

use libulc::codec::encode_payload;
use libulc::prelude::*;
use libulc::test_support;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let serial = parse_hex("04 9A FF 12 34 56 78").map_err(anyhow::Error::msg)?;
    let config = SessionConfig::builder().operation_id("demo-1").build();

    println!("=== Read tap ===");
    let mock = test_support::mock_with_image(&[0x11; 80]);
    let (hex_serial, document) =
        Session::process_read(DetectedTag::new(&serial, mock), config.clone())?;
    println!("{} -> {}", hex_serial, document);

    println!("\n=== Write tap ===");
    let mut mock = test_support::mock_with_image(&[0x11; 80]);
    mock.push_response(test_support::challenge_answer(&[0xC0; 8]));
    mock.push_response(test_support::verification_answer(b"RESPONSE"));
    test_support::seed_write_acks(&mut mock, 20);

    let (mut session, preamble) =
        Session::process_write(DetectedTag::new(&serial, mock), config, 1200)?;
    println!("to authority: {}", preamble);

    // Stand-in for the authority's answer.
    let reply = AuthResponse::new(
        EkRnd2RndR1::from_bytes([0x3C; 16]),
        EkRndR2::from_bytes(*b"RESPONSE"),
    );
    session.complete_authentication(&reply)?;
    session.write(&encode_payload(&[0x22; 80]))?;

    println!(
        "wrote {} ({} frames sent)",
        bytes_to_hex_upper(session.image().as_bytes()),
        session.link().sent.len()
    );
    Ok(())
}
