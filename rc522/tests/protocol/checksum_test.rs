#[path = "../common/mod.rs"]
mod common;

use rc522::Error;
use rc522::device::{MockChip, RegisterAccess};
use rc522::protocol::{calculate_crc, crc_a, verify_crc_a};
use rc522::types::Register;
use rc522::utils::PollBudget;

#[test]
fn hardware_and_software_crc_agree() {
    let mut chip = MockChip::new();
    for frame in [
        &[0x50u8, 0x00][..],
        &[0x30, 0x04][..],
        &[0x93, 0x70, 1, 2, 3, 4, 4][..],
    ] {
        assert_eq!(
            calculate_crc(&mut chip, frame, PollBudget::CRC),
            crc_a(frame)
        );
    }
    assert_eq!(chip.crc_inputs.len(), 3);
}

#[test]
fn stalled_coprocessor_uses_full_budget() {
    let mut chip = MockChip::new();
    chip.crc_stalled = true;
    chip.set_register(Register::CRCResultRegLow, 0xAB);
    chip.set_register(Register::CRCResultRegHigh, 0xCD);

    let crc = calculate_crc(&mut chip, &[0x30, 0x00], PollBudget::CRC);
    assert_eq!(crc, [0xAB, 0xCD]);
    assert_eq!(chip.div_irq_polls, 255);
    assert_eq!(chip.read_register(Register::FIFOLevelReg), 2);
}

#[test]
fn mismatch_reports_little_endian_values() {
    let err = verify_crc_a(&[0x50, 0x00], [0x00, 0x11]).unwrap_err();
    assert_eq!(
        err,
        Error::CrcMismatch {
            expected: 0xCD57,
            actual: 0x1100
        }
    );
}
