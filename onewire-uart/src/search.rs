//! The ROM search state machine: Maxim AN187's binary-tree walk with the
//! discrepancy stack collapsed to a single integer, `last_discrepancy`.
//!
//! One call to [`OneWireUartBus::search`] enumerates the next device's ROM
//! address. State lives entirely in the bus handle's scratch ROM buffer
//! and `last_discrepancy` byte, so repeated calls walk the whole bus one
//! device at a time without any other bookkeeping.

use crate::bus::OneWireUartBus;
use crate::consts::SEARCH_ROM_CMD;
use crate::error::Error;
use crate::rom::RomId;
use crate::transport::LlTransport;
use crate::OneWireResult;

/// `last_discrepancy` sentinel meaning "no search yet, start fresh."
pub const FIRST_DEV: u8 = 0xFF;

/// `last_discrepancy` sentinel meaning "enumeration complete, no more
/// devices."
pub const LAST_DEV: u8 = 0x00;

impl<T: LlTransport> OneWireUartBus<'_, T> {
    /// Reset the search state so the next [`search`](Self::search) call
    /// starts a fresh enumeration from the beginning of the bus.
    pub fn search_reset(&mut self) {
        self.last_discrepancy = FIRST_DEV;
        self.rom = [0; 8];
    }

    /// Enumerate the next device on the bus using the default
    /// `SEARCH_ROM` command.
    ///
    /// Returns `Ok(rom)` for each device found, one per call, in the fixed
    /// order the binary-tree walk visits branches. Once every device has
    /// been returned, the next call resets search state to `FIRST_DEV` and
    /// returns [`Error::NoDevice`].
    pub fn search(&mut self) -> OneWireResult<RomId, T::Error> {
        self.search_with_command(SEARCH_ROM_CMD)
    }

    /// Enumerate the next device on the bus using the given search
    /// command (`SEARCH_ROM_CMD` or `ALARM_SEARCH_CMD`, or any other
    /// command byte a caller wants the devices to interpret as a search).
    pub fn search_with_command(&mut self, command: u8) -> OneWireResult<RomId, T::Error> {
        if self.last_discrepancy == LAST_DEV {
            self.search_reset();
            return Err(Error::NoDevice);
        }

        self.reset()?;
        self.write_byte(command)?;

        let mut next_discrepancy: u8 = 0;
        let mut found_device = false;

        for id_bit_number in 1..=64u8 {
            let id_bit = self.read_bit()?;
            let id_bit_cpl = self.read_bit()?;

            let chosen = match (id_bit, id_bit_cpl) {
                (true, true) => {
                    // No slave responded at all; abort the whole pass.
                    break;
                }
                (false, true) => false, // all responders have a 0 here
                (true, false) => true,  // all responders have a 1 here
                (false, false) => {
                    // Collision: some slaves have 0, some have 1.
                    if id_bit_number < self.last_discrepancy {
                        rom_bit(&self.rom, id_bit_number)
                    } else if id_bit_number == self.last_discrepancy {
                        true
                    } else {
                        next_discrepancy = id_bit_number;
                        false
                    }
                }
            };

            self.write_bit(chosen)?;
            set_rom_bit(&mut self.rom, id_bit_number, chosen);

            if id_bit_number == 64 {
                found_device = true;
            }
        }

        self.last_discrepancy = next_discrepancy;

        if !found_device {
            return Err(Error::NoDevice);
        }

        Ok(RomId::from_bytes(self.rom))
    }
}

/// Bit `n` (1-indexed) of the scratch ROM, matching the layout `search`
/// writes into it: bit 0 of byte 0 is id_bit_number 1.
pub(crate) fn rom_bit(rom: &[u8; 8], id_bit_number: u8) -> bool {
    let n = id_bit_number - 1;
    let byte = rom[(n / 8) as usize];
    byte & (1 << (n % 8)) != 0
}

fn set_rom_bit(rom: &mut [u8; 8], id_bit_number: u8, value: bool) {
    let n = id_bit_number - 1;
    let mask = 1 << (n % 8);
    let byte = &mut rom[(n / 8) as usize];
    if value {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}
