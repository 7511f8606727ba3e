#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rc522::constants::{MAX_FRAME_LEN, NVB_ANTICOLLISION, NVB_SELECT};
use rc522::device::CardReply;
use rc522::test_support::shared_mock_device;
use rc522::types::{CascadeLevel, RequestCode};
use rc522::{Error, FaultKind};

#[test]
fn empty_field_times_out_every_command() {
    let (mut dev, chip) = shared_mock_device(vec![]);

    let err = dev.request_card(RequestCode::Idle).unwrap_err();
    assert_eq!(err, Error::Timeout { polls: 1000 });
    assert_eq!(err.kind(), FaultKind::Timeout);
    assert_eq!(chip.borrow().com_irq_polls, 1000);

    assert!(dev.read_page(0).is_err());
    assert!(dev.write_page(4, [0; 4]).is_err());
}

#[test]
fn corrupted_uid_level() {
    let (mut dev, _chip) =
        shared_mock_device(vec![CardReply::bytes(&[0x11, 0x22, 0x33, 0x44, 0x00])]);
    let err = dev.read_uid(CascadeLevel::One, NVB_ANTICOLLISION).unwrap_err();
    assert_eq!(err, Error::BccMismatch { residue: 0x44 });
    assert_eq!(err.kind(), FaultKind::Protocol);
}

#[test]
fn read_answers_one_bit_off() {
    let bytes = fixtures::page_reply_bytes(&fixtures::sample_page_data());

    let (mut dev, _chip) = shared_mock_device(vec![CardReply::bits(&bytes, 7)]);
    assert_eq!(
        dev.read_page(0).unwrap_err(),
        Error::InvalidBitLength {
            expected: 144,
            actual: 143
        }
    );

    let mut long = bytes.clone();
    long.push(0x00);
    let (mut dev, _chip) = shared_mock_device(vec![CardReply::bits(&long, 1)]);
    assert_eq!(
        dev.read_page(0).unwrap_err(),
        Error::InvalidBitLength {
            expected: 144,
            actual: 145
        }
    );
}

#[test]
fn select_answers_of_wrong_size() {
    for len in [2usize, 4] {
        let (mut dev, _chip) = shared_mock_device(vec![CardReply::bytes(&vec![0x08; len])]);
        let err = dev
            .select_card(CascadeLevel::One, NVB_SELECT, fixtures::sample_uid_bytes())
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidBitLength {
                expected: 24,
                actual: len * 8
            }
        );
    }
}

#[test]
fn write_nak() {
    let (mut dev, _chip) = shared_mock_device(vec![CardReply::bits(&[0x00], 4)]);
    assert_eq!(
        dev.write_page(4, [1, 2, 3, 4]).unwrap_err(),
        Error::Nak { code: 0x00 }
    );
}

#[test]
fn chip_error_flags_surface_as_hardware_faults() {
    let (mut dev, _chip) = shared_mock_device(vec![CardReply::Error { flags: 0x02 }]);
    let err = dev.request_card(RequestCode::Idle).unwrap_err();
    assert_eq!(err, Error::Hardware { flags: 0x02 });
    assert_eq!(err.kind(), FaultKind::Hardware);
}

#[test]
fn failed_exchange_leaves_frame_untouched() {
    let (mut dev, _chip) = shared_mock_device(vec![CardReply::Silent]);
    let mut frame = [0xEEu8; MAX_FRAME_LEN];
    frame[0] = 0x26;
    assert!(dev.transceive(&mut frame, 1).is_err());
    assert_eq!(frame[0], 0x26);
    assert!(frame[1..].iter().all(|&b| b == 0xEE));
}
