#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rc522::constants::{NVB_ANTICOLLISION, NVB_SELECT};
use rc522::device::CardReply;
use rc522::test_support::shared_mock_device;
use rc522::types::{CascadeLevel, ChipCommand, RequestCode, Uid};
use rc522::{Status, StatusExt};

#[test]
fn step_by_step_session() {
    common::init_logging();
    let uid = fixtures::sample_uid_bytes();
    let data = fixtures::sample_page_data();
    let (mut dev, chip) = shared_mock_device(vec![
        fixtures::atqa_reply(),
        fixtures::uid_level_reply(uid),
        fixtures::sak_reply(0x00),
        fixtures::page_reply(&data),
        fixtures::ack_reply(),
    ]);

    let atqa = dev.request_card(RequestCode::Idle).unwrap();
    assert_eq!(atqa.as_bytes(), &[0x04, 0x00]);

    let level = dev.read_uid(CascadeLevel::One, NVB_ANTICOLLISION).unwrap();
    assert_eq!(level.as_bytes(), &uid);

    let sak = dev
        .select_card(CascadeLevel::One, NVB_SELECT, *level.as_bytes())
        .unwrap();
    assert!(!sak.is_uid_incomplete());

    let page = dev.read_page(4).unwrap();
    assert_eq!(page.as_bytes(), &data);

    assert!(dev.write_page(4, [0xCA, 0xFE, 0xBA, 0xBE]).is_ok());

    // no card answers the halt
    assert_eq!(dev.halt().status(), Status::Err);

    let c = chip.borrow();
    assert_eq!(c.exchanges.len(), 6);
    assert_eq!(c.last_command(), Some(ChipCommand::Idle as u8));
}

#[test]
fn activate_then_read() {
    let data = fixtures::sample_page_data();
    let mut replies = fixtures::single_uid_activation();
    replies.push(fixtures::page_reply(&data));
    let (mut dev, _chip) = shared_mock_device(replies);

    let card = dev.activate(RequestCode::Idle).unwrap();
    assert_eq!(card.uid(), &Uid::Single(fixtures::sample_uid_bytes()));
    assert_eq!(
        card.read_page(&mut dev, 0).unwrap().page(3),
        Some([0xE1, 0x10, 0x12, 0x00])
    );
}

#[test]
fn halt_is_idempotent() {
    let (mut dev, chip) = shared_mock_device(vec![CardReply::Silent; 3]);
    for _ in 0..3 {
        assert_eq!(dev.halt().status(), Status::Err);
    }
    let c = chip.borrow();
    assert_eq!(c.exchanges.len(), 3);
    assert!(c.exchanges.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn crc_check_on_reads_is_opt_in() {
    use rc522::device::ReaderConfig;
    use rc522::test_support::shared_mock_device_with_config;

    let mut bytes = fixtures::page_reply_bytes(&fixtures::sample_page_data());
    bytes[17] ^= 0x55;

    let (mut dev, _chip) = shared_mock_device(vec![CardReply::bytes(&bytes)]);
    assert!(dev.read_page(0).is_ok());

    let config = ReaderConfig::default().with_read_crc_check(true);
    let (mut dev, _chip) = shared_mock_device_with_config(vec![CardReply::bytes(&bytes)], config);
    assert!(dev.read_page(0).is_err());
}

#[test]
fn double_size_uid_session() -> anyhow::Result<()> {
    let first = [0x88, 0x04, 0xA2, 0x5C];
    let second = [0x19, 0x6B, 0x80, 0x01];
    let (mut dev, _chip) = shared_mock_device(vec![
        CardReply::bytes(&[0x44, 0x00]),
        fixtures::uid_level_reply(first),
        fixtures::sak_reply(0x04),
        fixtures::uid_level_reply(second),
        fixtures::sak_reply(0x00),
    ]);

    let card = dev.activate(RequestCode::All)?;
    assert_eq!(hex::encode(card.uid().as_bytes()), "04a25c196b8001");
    assert_eq!(card.uid().to_hex(), "04a25c196b8001");
    Ok(())
}
