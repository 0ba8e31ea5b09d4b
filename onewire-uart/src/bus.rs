use crate::codec::{decode_bit, decode_byte, encode_bit, encode_byte};
use crate::consts::{MATCH_ROM_CMD, RESET_PULSE, SKIP_ROM_CMD};
use crate::error::Error;
use crate::rom::RomId;
use crate::transport::{BaudRate, LlTransport};
use crate::OneWireResult;

/// A 1-Wire bus master tunneled over one [`LlTransport`].
///
/// Borrows the transport for the handle's lifetime rather than owning it,
/// so the same transport can be reclaimed (e.g. repurposed for another
/// protocol) once the handle is [`deinit`](OneWireUartBus::deinit)ed.
///
/// Carries an 8-byte scratch ROM buffer and a single `last_discrepancy`
/// byte as the only state a [`search`](OneWireUartBus::search) pass needs
/// between calls — see [`crate::search`].
pub struct OneWireUartBus<'a, T: LlTransport> {
    pub(crate) transport: &'a mut T,
    pub(crate) rom: [u8; 8],
    pub(crate) last_discrepancy: u8,
}

impl<'a, T: LlTransport> OneWireUartBus<'a, T> {
    /// Bring the transport up and return a usable bus handle.
    ///
    /// No other operation may run on a handle that failed to `init`.
    pub fn init(transport: &'a mut T) -> OneWireResult<Self, T::Error> {
        transport.init().map_err(|_| Error::Generic)?;
        Ok(Self {
            transport,
            rom: [0; 8],
            last_discrepancy: crate::search::FIRST_DEV,
        })
    }

    /// Release the transport. The handle is not usable afterwards.
    pub fn deinit(self) -> OneWireResult<(), T::Error> {
        self.transport.deinit().map_err(|_| Error::Generic)
    }

    /// Send a reset pulse and check for a presence pulse.
    ///
    /// Switches to 9,600 baud for the pulse itself and always restores
    /// 115,200 baud before returning, even if the pulse exchange failed.
    pub fn reset(&mut self) -> OneWireResult<(), T::Error> {
        self.transport
            .set_baudrate(BaudRate::Reset)
            .map_err(Error::Baud)?;

        let tx = [RESET_PULSE];
        let mut rx = [0u8; 1];
        let txrx_result = self.transport.tx_rx(&tx, &mut rx).map_err(Error::TxRx);
        let restore_result = self.transport.set_baudrate(BaudRate::Data).map_err(Error::Baud);

        // The tx/rx failure is the root cause when both it and the baud
        // restore fail; only surface the restore failure on its own.
        txrx_result?;
        restore_result?;

        match rx[0] {
            // 0x00: bus shorted or driver fault. RESET_PULSE: bounced back
            // unchanged, no slave asserted a presence pulse.
            0x00 | RESET_PULSE => Err(Error::Presence),
            _ => Ok(()),
        }
    }

    /// Write a single 1-Wire bit.
    pub fn write_bit(&mut self, bit: bool) -> OneWireResult<(), T::Error> {
        let tx = [encode_bit(bit)];
        let mut rx = [0u8; 1];
        self.transport.tx_rx(&tx, &mut rx).map_err(Error::TxRx)
    }

    /// Read a single 1-Wire bit (equivalent to a write-1/read slot).
    pub fn read_bit(&mut self) -> OneWireResult<bool, T::Error> {
        let tx = [encode_bit(true)];
        let mut rx = [0u8; 1];
        self.transport.tx_rx(&tx, &mut rx).map_err(Error::TxRx)?;
        Ok(decode_bit(rx[0]))
    }

    /// Write a 1-Wire byte: one transport exchange of 8 UART bytes,
    /// LSB-first.
    pub fn write_byte(&mut self, byte: u8) -> OneWireResult<(), T::Error> {
        let tx = encode_byte(byte);
        let mut rx = [0u8; 8];
        self.transport.tx_rx(&tx, &mut rx).map_err(Error::TxRx)
    }

    /// Read a 1-Wire byte: writing `0xFF` eight times and decoding what
    /// the bus echoes back.
    pub fn read_byte(&mut self) -> OneWireResult<u8, T::Error> {
        let tx = encode_byte(0xFF);
        let mut rx = [0u8; 8];
        self.transport.tx_rx(&tx, &mut rx).map_err(Error::TxRx)?;
        Ok(decode_byte(&rx))
    }

    /// Address one device: `MATCH_ROM` followed by its 8 ROM bytes. All
    /// non-matching slaves go silent until the next reset.
    pub fn match_rom(&mut self, rom: RomId) -> OneWireResult<(), T::Error> {
        self.write_byte(MATCH_ROM_CMD)?;
        for byte in rom.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Address every device simultaneously: `SKIP_ROM`.
    pub fn skip_rom(&mut self) -> OneWireResult<(), T::Error> {
        self.write_byte(SKIP_ROM_CMD)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedTransport;
    use super::*;

    #[test]
    fn reset_succeeds_on_pulldown() {
        // Transport returns 0xE0 for the reset byte: some slave pulled low.
        let mut t = ScriptedTransport::new([0xE0]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();
        assert!(bus.reset().is_ok());
    }

    #[test]
    fn reset_fails_when_bus_bounces_f0() {
        // Transport bounces the reset byte back unchanged: no presence pulse.
        let mut t = ScriptedTransport::new([RESET_PULSE]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();
        assert_eq!(bus.reset(), Err(Error::Presence));
    }

    #[test]
    fn reset_shorted_bus() {
        let mut t = ScriptedTransport::new([0x00]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();
        assert_eq!(bus.reset(), Err(Error::Presence));
    }

    #[test]
    fn reset_restores_data_baud_even_on_txrx_failure() {
        let mut t = ScriptedTransport::new([]);
        t.fail_tx_rx = true;
        let mut bus = OneWireUartBus::init(&mut t).unwrap();
        assert_eq!(bus.reset(), Err(Error::TxRx(super::test_support::StubError)));
        assert_eq!(bus.transport.baud, Some(BaudRate::Data));
    }

    #[test]
    fn write_then_read_byte_on_ideal_echo_bus() {
        // An idealized bus where the echo equals the transmit: reading
        // back what was just written reproduces it.
        for byte in [0x00u8, 0x55, 0xAA, 0xFF, 0x9C] {
            let mut t = ScriptedTransport::new(crate::codec::encode_byte(byte));
            let mut bus = OneWireUartBus::init(&mut t).unwrap();
            assert_eq!(bus.read_byte().unwrap(), byte);
        }
    }
}
