//! Wire-level byte patterns and 1-Wire ROM command bytes.

/// Byte the master sends to generate a 1-Wire reset pulse, at 9,600 baud.
pub const RESET_PULSE: u8 = 0xF0;

/// Byte the master sends for a write-1 slot or a read slot, at 115,200
/// baud. A received byte of exactly this value means the wire bit was 1;
/// any other received value means a slave pulled the line low, i.e. bit 0.
pub const WRITE_1_READ_SLOT: u8 = 0xFF;

/// Byte the master sends for a write-0 slot, at 115,200 baud.
pub const WRITE_0_SLOT: u8 = 0x00;

/// `SEARCH_ROM`: begin binary-tree enumeration of every device on the bus.
pub const SEARCH_ROM_CMD: u8 = 0xF0;

/// `READ_ROM`: read the ROM of the single device on the bus.
pub const READ_ROM_CMD: u8 = 0x33;

/// `MATCH_ROM`: address one device by its ROM.
pub const MATCH_ROM_CMD: u8 = 0x55;

/// `SKIP_ROM`: address every device on the bus simultaneously.
pub const SKIP_ROM_CMD: u8 = 0xCC;

/// `ALARM_SEARCH`: enumerate only devices with their alarm flag set.
pub const ALARM_SEARCH_CMD: u8 = 0xEC;
