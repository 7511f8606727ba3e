// fixtures.rs — commonly used card answers

use rc522::device::CardReply;
use rc522::protocol::crc_a;
use rc522::types::bcc;

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x11, 0x22, 0x33, 0x44]
}

pub fn atqa_reply() -> CardReply {
    CardReply::bytes(&[0x04, 0x00])
}

/// One anticollision level with a correct check byte.
pub fn uid_level_reply(uid: [u8; 4]) -> CardReply {
    let mut raw = uid.to_vec();
    raw.push(bcc(&uid));
    CardReply::bytes(&raw)
}

pub fn sak_reply(sak: u8) -> CardReply {
    let crc = crc_a(&[sak]);
    CardReply::bytes(&[sak, crc[0], crc[1]])
}

pub fn sample_page_data() -> [u8; 16] {
    [
        0x04, 0x11, 0x22, 0xB7, 0x33, 0x44, 0x55, 0x66, 0x25, 0x48, 0x00, 0x00, 0xE1, 0x10, 0x12,
        0x00,
    ]
}

/// 16 data bytes followed by their CRC_A.
pub fn page_reply_bytes(data: &[u8; 16]) -> Vec<u8> {
    let mut reply = data.to_vec();
    reply.extend_from_slice(&crc_a(data));
    reply
}

pub fn page_reply(data: &[u8; 16]) -> CardReply {
    CardReply::bytes(&page_reply_bytes(data))
}

pub fn ack_reply() -> CardReply {
    CardReply::bits(&[0x0A], 4)
}

/// Complete activation script for a single size UID card.
pub fn single_uid_activation() -> Vec<CardReply> {
    vec![
        atqa_reply(),
        uid_level_reply(sample_uid_bytes()),
        sak_reply(0x00),
    ]
}
