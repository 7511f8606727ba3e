#[path = "../common/mod.rs"]
mod common;

use rc522::transport::{MockTransport, Transport};

#[test]
fn replies_follow_transfers() {
    let mut m = MockTransport::new();
    m.push_reply(&[0x00, 0x92]);
    m.select();
    assert_eq!(m.transfer_byte(0xEE), 0x00);
    assert_eq!(m.transfer_byte(0x00), 0x92);
    // drained queue reads as a floating line
    assert_eq!(m.transfer_byte(0x00), 0x00);
    m.deselect();
    assert_eq!(m.transactions, vec![vec![0xEE, 0x00, 0x00]]);
}

#[test]
fn transfers_without_select_are_counted() {
    let mut m = MockTransport::new();
    m.transfer_byte(0x01);
    assert_eq!(m.unselected_transfers, 1);
    assert!(m.transactions.is_empty());
    assert!(!m.is_selected());
}
