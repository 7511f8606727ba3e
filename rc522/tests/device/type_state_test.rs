#[path = "../common/mod.rs"]
mod common;

use common::helpers::SharedTransport;
use rc522::Error;
use rc522::device::{Device, DeviceBuilder, MockChip, ReaderConfig};
use rc522::types::Register;

#[test]
fn initialize_over_spi_sends_setup_sequence() {
    common::init_logging();
    let transport = SharedTransport::new();
    let device = Device::new_with_transport(Box::new(transport.clone()));
    let _dev = device.initialize();

    assert_eq!(transport.0.borrow().resets, 1);
    assert_eq!(
        transport.transactions(),
        vec![
            vec![Register::CommandReg.write_address(), 0x0F],
            vec![Register::TxAutoReg.write_address(), 0x40],
            vec![Register::ModeReg.write_address(), 0x3D],
            vec![Register::TxControlReg.read_address(), 0x00],
            vec![Register::TxControlReg.write_address(), 0x03],
        ]
    );
}

#[test]
fn builder_requires_a_chip() {
    let res = DeviceBuilder::new().build_uninitialized();
    assert!(matches!(res, Err(Error::DeviceNotFound)));
}

#[test]
fn builder_carries_config_through_initialize() {
    let config = ReaderConfig::default()
        .with_transceive_polls(50)
        .with_read_crc_check(true);
    let device = DeviceBuilder::new()
        .with_chip(Box::new(MockChip::new()))
        .with_config(config)
        .build_uninitialized()
        .unwrap();

    let mut dev = device.initialize();
    assert_eq!(dev.config(), &config);
    assert_eq!(dev.version(), 0x92);
}
