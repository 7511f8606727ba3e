// rc522/src/transport/mock.rs
//! Recording transport for tests.

use std::collections::VecDeque;

use crate::transport::traits::Transport;

/// Mock transport for unit tests. It records every select-scoped
/// transaction and answers transfers from a queue of reply bytes.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Completed transactions, one byte vector per select/deselect pair.
    pub transactions: Vec<Vec<u8>>,
    /// Bytes shifted in while a transaction is open; 0x00 once drained.
    pub replies: VecDeque<u8>,
    /// Transfers performed while chip-select was released.
    pub unselected_transfers: usize,
    /// Calls to `reset`
    pub resets: usize,
    current: Option<Vec<u8>>,
}

impl MockTransport {
    /// Empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes shifted in by the next transfers.
    pub fn push_reply(&mut self, bytes: &[u8]) {
        self.replies.extend(bytes.iter().copied());
    }

    /// True while a transaction is open.
    pub fn is_selected(&self) -> bool {
        self.current.is_some()
    }
}

impl Transport for MockTransport {
    fn transfer_byte(&mut self, out: u8) -> u8 {
        match self.current.as_mut() {
            Some(tx) => tx.push(out),
            None => self.unselected_transfers += 1,
        }
        self.replies.pop_front().unwrap_or(0)
    }

    fn select(&mut self) {
        // a second select without deselect keeps the open transaction
        if self.current.is_none() {
            self.current = Some(Vec::new());
        }
    }

    fn deselect(&mut self) {
        if let Some(tx) = self.current.take() {
            self.transactions.push(tx);
        }
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}
