use std::cell::RefCell;
use std::rc::Rc;

use rc522::transport::{MockTransport, Transport};

/// Transport wrapper so a test keeps a handle on the mock after the
/// device took ownership of it.
#[derive(Clone, Default)]
pub struct SharedTransport(pub Rc<RefCell<MockTransport>>);

impl SharedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> Vec<Vec<u8>> {
        self.0.borrow().transactions.clone()
    }
}

impl Transport for SharedTransport {
    fn transfer_byte(&mut self, out: u8) -> u8 {
        self.0.borrow_mut().transfer_byte(out)
    }

    fn select(&mut self) {
        self.0.borrow_mut().select()
    }

    fn deselect(&mut self) {
        self.0.borrow_mut().deselect()
    }

    fn reset(&mut self) {
        self.0.borrow_mut().reset()
    }
}
