/// Build a 16-bit word from its little endian `low` and `high` bytes
pub fn word(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) | (low as u16)
}

/// Split a 16-bit word in its little endian (low, high) bytes
pub fn le_bytes(value: u16) -> [u8; 2] {
    [(value & 0x00FF) as u8, (value >> 8) as u8]
}
