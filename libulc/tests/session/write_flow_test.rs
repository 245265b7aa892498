#[path = "../common/mod.rs"]
mod common;

use libulc::codec::encode_payload;
use libulc::transport::{MockTransport, Transport};
use libulc::{AuthResponse, AuthState, Error, ErrorKind, Session, WritePreamble};

/// Mock scripted up to and including the phase-1 answer.
fn suspended_mock() -> MockTransport {
    let mut mock = common::mock_with_image(&common::fixtures::sample_image());
    mock.push_response(common::challenge_answer(&common::fixtures::sample_challenge()));
    mock
}

#[test]
fn full_write_flow() {
    let mut mock = suspended_mock();
    mock.push_response(common::verification_answer(b"AAAAAAAA"));
    common::seed_write_acks(&mut mock, 20);

    let (mut session, json) = Session::process_write(
        common::fixtures::tag(mock),
        common::fixtures::config(),
        2500,
    )
    .unwrap();

    let preamble = WritePreamble::from_json(&json).unwrap();
    assert_eq!(preamble.request_type, 2);
    assert_eq!(preamble.operation_id, "op-42");
    assert_eq!(preamble.serial_number, "FF9A04");
    assert_eq!(preamble.expiration_date, 0);
    assert_eq!(preamble.new_balance, 2500);
    assert_eq!(preamble.card_data.as_bytes(), &common::fixtures::sample_image());
    assert_eq!(preamble.rnd_1.as_bytes(), &common::fixtures::sample_challenge());
    assert_eq!(session.auth_state(), AuthState::ResponseAwaited);
    assert!(session.link().is_connected());

    // The authority answers in another call context.
    let reply = common::fixtures::sample_auth_response().to_json().unwrap();
    session
        .complete_authentication(&AuthResponse::from_json(&reply).unwrap())
        .unwrap();
    assert_eq!(session.auth_state(), AuthState::ResponseVerified);
    assert!(session.link().is_connected());

    let new_data = common::fixtures::replacement_image();
    session.write(&encode_payload(&new_data)).unwrap();

    assert!(session.is_closed());
    assert_eq!(session.image().as_bytes(), &new_data);

    let sent = &session.link().sent;
    // 5 reads, phase 1, phase 2, 20 writes
    assert_eq!(sent.len(), 27);
    assert_eq!(sent[5], vec![0x1A, 0x00]);
    assert_eq!(sent[6].len(), 17);
    assert_eq!(sent[6][0], 0xAF);
    for (i, frame) in sent[7..].iter().enumerate() {
        assert_eq!(frame[0], 0xA2);
        assert_eq!(frame[1], 0x08 + i as u8);
        assert_eq!(&frame[2..], &new_data[i * 4..i * 4 + 4]);
    }
    assert_eq!(session.link().close_calls, 1);
}

#[test]
fn mismatched_card_answer_rejects_and_closes() {
    let mut mock = suspended_mock();
    mock.push_response(common::verification_answer(b"AAAABAAA"));

    let (mut session, _) =
        Session::process_write(common::fixtures::tag(mock), common::fixtures::config(), 0)
            .unwrap();
    let err = session
        .complete_authentication(&common::fixtures::sample_auth_response())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ProtocolViolation);
    assert_eq!(err.user_message(), "could not authenticate/write");
    assert_eq!(session.auth_state(), AuthState::Rejected);
    assert!(session.is_closed());
    assert!(!session.link().is_connected());

    // no retry: the session refuses to go on
    assert!(matches!(
        session.write(&encode_payload(&[0u8; 80])),
        Err(Error::InvalidState { .. })
    ));
    assert_eq!(session.link().sent.len(), 7);
}

#[test]
fn phase1_wrong_status_fails_write_flow() {
    let mut mock = common::mock_with_image(&[0; 80]);
    mock.push_response(vec![0x00, 1, 2, 3, 4, 5, 6, 7, 8]);
    common::seed_write_acks(&mut mock, 20);

    let result = Session::process_write(common::fixtures::tag(mock), common::fixtures::config(), 0);
    match result {
        Err(e) => {
            assert!(matches!(e, Error::AuthenticationRejected { .. }));
            assert_eq!(e.kind(), ErrorKind::ProtocolViolation);
        }
        Ok(_) => panic!("expected phase 1 failure"),
    }
}

#[test]
fn write_failure_midway_closes() {
    let mut mock = suspended_mock();
    mock.push_response(common::verification_answer(b"AAAAAAAA"));
    common::seed_write_acks(&mut mock, 4);
    mock.push_failure("tag removed");

    let (mut session, _) =
        Session::process_write(common::fixtures::tag(mock), common::fixtures::config(), 0)
            .unwrap();
    session
        .complete_authentication(&common::fixtures::sample_auth_response())
        .unwrap();

    let err = session
        .write(&encode_payload(&common::fixtures::replacement_image()))
        .unwrap_err();
    assert!(matches!(err, Error::WriteFailed { page: 0x0C, .. }));
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(session.is_closed());
    // 5 reads + 2 auth + 5 writes (the fifth failed)
    assert_eq!(session.link().sent.len(), 12);
}

#[test]
fn verification_status_is_configurable() {
    let mut mock = suspended_mock();
    let mut answer = vec![0xAF];
    answer.extend_from_slice(b"AAAAAAAA");
    mock.push_response(answer);

    let config = libulc::SessionConfig::builder()
        .operation_id("op-42")
        .verification_status(0xAF)
        .build();
    let (mut session, _) =
        Session::process_write(common::fixtures::tag(mock), config, 0).unwrap();
    session
        .complete_authentication(&common::fixtures::sample_auth_response())
        .unwrap();
    assert_eq!(session.auth_state(), AuthState::ResponseVerified);
}
