#[path = "../common/mod.rs"]
mod common;

use common::helpers::SharedTransport;
use rc522::device::{RegisterAccess, RegisterBus};
use rc522::types::Register;

#[test]
fn read_write_framing() {
    let transport = SharedTransport::new();
    transport.0.borrow_mut().push_reply(&[0x00, 0x92]);
    let mut bus = RegisterBus::new(Box::new(transport.clone()));

    assert_eq!(bus.read_register(Register::VersionReg), 0x92);
    bus.write_register(Register::CommandReg, 0x0F);

    assert_eq!(
        transport.transactions(),
        vec![vec![0xEE, 0x00], vec![0x02, 0x0F]]
    );
    assert!(!transport.0.borrow().is_selected());
}

#[test]
fn set_and_clear_bits_read_modify_write() {
    let transport = SharedTransport::new();
    transport.0.borrow_mut().push_reply(&[0x00, 0x80, 0x00, 0x00]);
    let mut bus = RegisterBus::new(Box::new(transport.clone()));

    bus.set_bits(Register::TxControlReg, 0x03);
    {
        let t = transport.transactions();
        assert_eq!(t[0], vec![0xA8, 0x00]);
        assert_eq!(t[1], vec![0x28, 0x83]);
    }

    transport.0.borrow_mut().push_reply(&[0x00, 0x83, 0x00, 0x00]);
    bus.clear_bits(Register::TxControlReg, 0x03);
    assert_eq!(transport.transactions()[3], vec![0x28, 0x80]);
}

#[test]
fn power_on_resets_transport() {
    let transport = SharedTransport::new();
    let mut bus = RegisterBus::new(Box::new(transport.clone()));
    bus.power_on();
    assert_eq!(transport.0.borrow().resets, 1);
    assert!(transport.transactions().is_empty());
}
