//! Round-trip tests for the freeze wire body

use bytes::Bytes;
use meridian_freeze::{FileId, FreezeTransaction, FreezeType, Timestamp};

#[test]
fn full_body_round_trips() {
    let mut body = FreezeTransaction::new();
    body.set_freeze_type(FreezeType::FreezeUpgrade)
        .set_update_file(FileId::new(150))
        .set_file_hash(Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]))
        .set_start_time(Timestamp::new(1_735_689_600, 500));

    let wire = body.to_wire_body().unwrap();
    let decoded = FreezeTransaction::from_wire_body(&wire).unwrap();

    assert_eq!(decoded, body);
    assert_eq!(decoded.freeze_type(), FreezeType::FreezeUpgrade);
    assert_eq!(decoded.update_file(), Some(FileId::new(150)));
    assert_eq!(
        decoded.file_hash(),
        Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef])
    );
    assert_eq!(decoded.start_time(), Some(Timestamp::new(1_735_689_600, 500)));
}

#[test]
fn minimal_body_round_trips() {
    let body = FreezeTransaction::new();

    let wire = body.to_wire_body().unwrap();
    let decoded = FreezeTransaction::from_wire_body(&wire).unwrap();

    assert_eq!(decoded, body);
    assert_eq!(decoded.freeze_type(), FreezeType::UnknownFreezeType);
    assert_eq!(decoded.update_file(), None);
    assert!(decoded.file_hash().is_empty());
    assert_eq!(decoded.start_time(), None);
}

#[test]
fn optional_fields_round_trip_independently() {
    let mut abort = FreezeTransaction::new();
    abort.set_freeze_type(FreezeType::FreezeAbort);
    let decoded = FreezeTransaction::from_wire_body(&abort.to_wire_body().unwrap()).unwrap();
    assert_eq!(decoded, abort);

    let mut prepare = FreezeTransaction::new();
    prepare
        .set_freeze_type(FreezeType::PrepareUpgrade)
        .set_update_file(FileId::new(157))
        .set_file_hash(vec![7u8; 48]);
    let decoded = FreezeTransaction::from_wire_body(&prepare.to_wire_body().unwrap()).unwrap();
    assert_eq!(decoded, prepare);
    assert_eq!(decoded.start_time(), None);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(FreezeTransaction::from_wire_body(&[0xff, 0x00, 0x13]).is_err());
}
