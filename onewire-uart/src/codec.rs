//! Pure functions mapping a 1-Wire bit/byte to and from the UART byte
//! pattern that reproduces it on the wire. No I/O of its own — see
//! [`crate::bus::OneWireUartBus`] for the transport exchanges built on top.

use crate::consts::{WRITE_0_SLOT, WRITE_1_READ_SLOT};

/// The UART byte the master transmits to produce the given 1-Wire bit on
/// the wire (a write-1/read slot for `true`, a write-0 slot for `false`).
#[inline]
pub(crate) const fn encode_bit(bit: bool) -> u8 {
    if bit {
        WRITE_1_READ_SLOT
    } else {
        WRITE_0_SLOT
    }
}

/// Decode the 1-Wire bit the bus echoed back during a time slot. Only an
/// exact `0xFF` means no slave pulled the line low, i.e. bit 1; any other
/// byte means bit 0.
#[inline]
pub(crate) const fn decode_bit(rx: u8) -> bool {
    rx == WRITE_1_READ_SLOT
}

/// Build the 8-byte UART transmit pattern for one 1-Wire byte, LSB-first.
#[inline]
pub(crate) fn encode_byte(byte: u8) -> [u8; 8] {
    let mut tx = [0u8; 8];
    for (i, slot) in tx.iter_mut().enumerate() {
        *slot = encode_bit(byte & (1 << i) != 0);
    }
    tx
}

/// Reconstruct the 1-Wire byte from the 8 bytes the bus echoed back,
/// LSB-first.
#[inline]
pub(crate) fn decode_byte(rx: &[u8; 8]) -> u8 {
    let mut byte = 0u8;
    for (i, &slot) in rx.iter().enumerate() {
        if decode_bit(slot) {
            byte |= 1 << i;
        }
    }
    byte
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_round_trip() {
        for bit in [false, true] {
            // Idealized bus: the echo equals the transmit (no pull-down).
            assert_eq!(decode_bit(encode_bit(bit)), bit);
        }
    }

    #[test]
    fn pulled_low_decodes_as_zero() {
        assert!(!decode_bit(0x00));
        assert!(!decode_bit(0xFE));
        assert!(!decode_bit(0x7F));
    }

    #[test]
    fn byte_round_trip_every_value() {
        for byte in 0..=255u8 {
            let tx = encode_byte(byte);
            // Idealized bus: echo equals transmit.
            assert_eq!(decode_byte(&tx), byte);
        }
    }
}
