// Card session against a simulated MFRC522.
//
// Runs the full request / anticollision / select / read / write / halt
// sequence without hardware. Set RUST_LOG=trace to watch register traffic.

use anyhow::Context;
use rc522::device::{CardReply, MockChip};
use rc522::prelude::*;
use rc522::protocol::crc_a;

fn scripted_card() -> MockChip {
    let uid = [0x04u8, 0xA2, 0x5C, 0x19];
    let mut level = uid.to_vec();
    level.push(rc522::bcc(&uid));
    let sak_crc = crc_a(&[0x00]);
    let mut page: Vec<u8> = (0u8..16).collect();
    page.extend_from_slice(&crc_a(&page));

    let mut chip = MockChip::new();
    chip.push_reply(CardReply::bytes(&[0x44, 0x00]));
    chip.push_reply(CardReply::bytes(&level));
    chip.push_reply(CardReply::bytes(&[0x00, sak_crc[0], sak_crc[1]]));
    chip.push_reply(CardReply::bytes(&page));
    chip.push_reply(CardReply::bits(&[0x0A], 4));
    chip
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let device = DeviceBuilder::new()
        .with_chip(Box::new(scripted_card()))
        .with_config(ReaderConfig::default().with_read_crc_check(true))
        .build_uninitialized()?;
    let mut dev = device.initialize();
    println!("chip version {:#04x}", dev.version());

    let card = dev.activate(RequestCode::Idle).context("no card in field")?;
    println!("UID  = {}", card.uid().to_hex());
    println!("ATQA = {}", hex::encode(card.atqa().as_bytes()));
    println!("SAK  = {:#04x}", card.sak().value());

    let data = card.read_page(&mut dev, 4)?;
    println!("pages 4..8 = {}", data.to_hex());

    card.write_page(&mut dev, 4, [0xDE, 0xAD, 0xBE, 0xEF])?;
    println!("page 4 written");

    // a halted card stays silent, so the error here is expected
    let status = card.halt(&mut dev).status();
    println!("halt -> {:?}", status);
    Ok(())
}
