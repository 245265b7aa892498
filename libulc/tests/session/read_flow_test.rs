#[path = "../common/mod.rs"]
mod common;

use libulc::transport::{MockTransport, Transport};
use libulc::{Error, ErrorKind, ReadResult, Session, TechId};

#[test]
fn read_flow_reports_document_and_closes() {
    let mock = common::mock_with_image(&common::fixtures::sample_image());
    let (serial, json) =
        Session::process_read(common::fixtures::tag(mock), common::fixtures::config()).unwrap();

    assert_eq!(serial, common::fixtures::sample_serial_hex());
    let doc = ReadResult::from_json(&json).unwrap();
    assert_eq!(doc.request_type, 1);
    assert_eq!(doc.serial_number, "FF9A04");
    assert_eq!(doc.operation_id, "op-42");
    assert_eq!(doc.card_data.as_bytes(), &common::fixtures::sample_image());
}

#[test]
fn read_issues_five_ascending_reads() {
    let mock = common::mock_with_image(&common::fixtures::sample_image());
    let mut session = Session::open(common::fixtures::tag(mock), common::fixtures::config()).unwrap();
    let image = *session.read(false).unwrap();

    assert_eq!(image.as_bytes().len(), 80);
    let pages: Vec<u8> = session.link().sent.iter().map(|f| f[1]).collect();
    assert_eq!(pages, vec![0x08, 0x0C, 0x10, 0x14, 0x18]);
    assert!(session.link().sent.iter().all(|f| f.len() == 2 && f[0] == 0x30));
    assert_eq!(session.link().connect_calls, 1);
    assert!(!session.link().is_connected());
}

#[test]
fn short_third_read_fails_without_further_reads() {
    let mut mock = MockTransport::ultralight_c();
    mock.push_response(vec![0x01; 16]);
    mock.push_response(vec![0x02; 16]);
    mock.push_response(vec![0x03; 8]);
    mock.push_response(vec![0x04; 16]);
    mock.push_response(vec![0x05; 16]);

    let mut session = Session::open(common::fixtures::tag(mock), common::fixtures::config()).unwrap();
    let err = session.read(true).unwrap_err();

    assert!(matches!(err, Error::ReadFailed { page: 0x10, .. }));
    assert_eq!(err.kind(), ErrorKind::ProtocolViolation);
    assert_eq!(err.user_message(), "could not read tag");
    assert_eq!(session.link().sent.len(), 3);
    // closed even though the caller asked to keep the link open
    assert!(session.is_closed());
    assert!(!session.link().is_connected());
}

#[test]
fn close_error_after_read_is_ignored() {
    let mut mock = common::mock_with_image(&[0x77; 80]);
    mock.fail_close = true;
    let mut session = Session::open(common::fixtures::tag(mock), common::fixtures::config()).unwrap();
    assert_eq!(session.read(false).unwrap().as_bytes(), &[0x77; 80]);
    assert!(session.is_closed());
}

#[test]
fn capability_mismatch_is_rejected_before_io() {
    let mock = MockTransport::new(vec![TechId::MifareUltralight], 253);
    let result = Session::process_read(common::fixtures::tag(mock), common::fixtures::config());
    match result {
        Err(e) => {
            assert_eq!(e.kind(), ErrorKind::TagRejected);
            assert_eq!(e.user_message(), "unsupported tag");
        }
        Ok(_) => panic!("expected rejection"),
    }
}

#[test]
fn minimum_frame_size_is_accepted() {
    let mut mock = common::mock_with_image(&[0; 80]);
    mock.max_transceive_length = 16;
    assert!(Session::process_read(common::fixtures::tag(mock), common::fixtures::config()).is_ok());
}
