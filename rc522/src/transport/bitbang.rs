// rc522/src/transport/bitbang.rs
//! Serial transport clocked in software over GPIO pins.

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::transport::traits::Transport;

/// The six lines wired between the controller and the reader chip.
pub struct Pins<SCK, MOSI, MISO, NSS, RST, PWR> {
    /// Serial clock, idles low
    pub sck: SCK,
    /// Controller data out
    pub mosi: MOSI,
    /// Controller data in, pulled up
    pub miso: MISO,
    /// Chip select, active low
    pub nss: NSS,
    /// Chip reset, active low
    pub rst: RST,
    /// Supply enable for the reader module
    pub pwr: PWR,
}

/// Settle hook used until [`BitBangTransport::with_delay`] installs one.
fn no_settle() {}

/// Software-clocked serial transport. The controller is bus master and
/// toggles every clock edge itself.
pub struct BitBangTransport<SCK, MOSI, MISO, NSS, RST, PWR, D = fn()> {
    pins: Pins<SCK, MOSI, MISO, NSS, RST, PWR>,
    delay: D,
}

impl<SCK, MOSI, MISO, NSS, RST, PWR> BitBangTransport<SCK, MOSI, MISO, NSS, RST, PWR>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
    NSS: OutputPin,
    RST: OutputPin,
    PWR: OutputPin,
{
    /// Take ownership of the lines and drive them to their idle levels.
    /// The chip stays powered down until [`Transport::reset`].
    pub fn new(pins: Pins<SCK, MOSI, MISO, NSS, RST, PWR>) -> Self {
        let mut this = Self {
            pins,
            delay: no_settle,
        };
        this.pins.nss.set_high().ok();
        this.pins.sck.set_low().ok();
        this
    }
}

impl<SCK, MOSI, MISO, NSS, RST, PWR, D> BitBangTransport<SCK, MOSI, MISO, NSS, RST, PWR, D> {
    /// Busy-wait hook run around each clock edge. Needed when the
    /// controller toggles pins faster than the chip can follow.
    pub fn with_delay<D2>(self, delay: D2) -> BitBangTransport<SCK, MOSI, MISO, NSS, RST, PWR, D2>
    where
        D2: FnMut(),
    {
        BitBangTransport {
            pins: self.pins,
            delay,
        }
    }

    /// Release the pins.
    pub fn release(self) -> Pins<SCK, MOSI, MISO, NSS, RST, PWR> {
        self.pins
    }
}

impl<SCK, MOSI, MISO, NSS, RST, PWR, D> Transport
    for BitBangTransport<SCK, MOSI, MISO, NSS, RST, PWR, D>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
    NSS: OutputPin,
    RST: OutputPin,
    PWR: OutputPin,
    D: FnMut(),
{
    fn transfer_byte(&mut self, out: u8) -> u8 {
        let mut out = out;
        let mut input = 0u8;
        for _ in 0..8 {
            if out & 0x80 != 0 {
                self.pins.mosi.set_high().ok();
            } else {
                self.pins.mosi.set_low().ok();
            }
            out <<= 1;
            (self.delay)();
            self.pins.sck.set_high().ok();
            input <<= 1;
            if self.pins.miso.is_high().unwrap_or(false) {
                input |= 1;
            }
            self.pins.sck.set_low().ok();
            (self.delay)();
        }
        input
    }

    fn select(&mut self) {
        self.pins.sck.set_low().ok();
        self.pins.nss.set_low().ok();
    }

    fn deselect(&mut self) {
        self.pins.nss.set_high().ok();
    }

    fn reset(&mut self) {
        self.pins.pwr.set_high().ok();
        self.pins.nss.set_high().ok();
        self.pins.sck.set_low().ok();
        self.pins.rst.set_low().ok();
        (self.delay)();
        self.pins.rst.set_high().ok();
        (self.delay)();
    }
}
