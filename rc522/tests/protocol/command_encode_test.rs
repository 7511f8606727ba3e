#[path = "../common/mod.rs"]
mod common;

use rc522::protocol::Command;
use rc522::types::{CascadeLevel, RequestCode};

#[test]
fn frame_bytes_per_command() {
    let cases: Vec<(Command, Vec<u8>, bool, u8)> = vec![
        (Command::Request(RequestCode::Idle), vec![0x26], false, 7),
        (Command::Request(RequestCode::All), vec![0x52], false, 7),
        (
            Command::anticollision(CascadeLevel::One),
            vec![0x93, 0x20],
            false,
            0,
        ),
        (
            Command::Select {
                level: CascadeLevel::Two,
                nvb: 0x70,
                uid: [0x01, 0x02, 0x03, 0x04],
            },
            vec![0x95, 0x70, 0x01, 0x02, 0x03, 0x04, 0x04],
            true,
            0,
        ),
        (Command::Read { page: 0x10 }, vec![0x30, 0x10], true, 0),
        (
            Command::Write {
                page: 0x05,
                data: [9, 8, 7, 6],
            },
            vec![0xA2, 0x05, 9, 8, 7, 6],
            true,
            0,
        ),
        (Command::Halt, vec![0x50, 0x00], true, 0),
    ];

    for (cmd, bytes, crc, last_bits) in cases {
        assert_eq!(cmd.encode(), bytes, "{:?}", cmd);
        assert_eq!(cmd.needs_crc(), crc, "{:?}", cmd);
        assert_eq!(cmd.tx_last_bits(), last_bits, "{:?}", cmd);
    }
}
