//! # CRC32 Implementation
//!
//! The common CRC-32 (Ethernet, ZIP, PNG): reflected polynomial `0xEDB88320`,
//! initial value `0xFFFFFFFF`, final XOR `0xFFFFFFFF`. Data can be fed
//! incrementally with [`Crc32::update`] and read back with [`Crc32::finalize`].
//!
//! **Note**: CRC is not cryptographically secure. It detects accidental
//! corruption, which is all the channel simulator needs.

/// Polynomial for standard CRC-32, reversed form of 0x04C11DB7.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;
/// Initial register value.
pub const INIT: u32 = 0xFFFF_FFFF;
/// Final XOR value.
pub const FINAL_XOR: u32 = 0xFFFF_FFFF;

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        // Reflected: process LSB to MSB
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Streaming CRC-32 state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    pub fn new() -> Self {
        Self { state: INIT }
    }

    /// Feeds more data into the checksum.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            let index = ((self.state ^ u32::from(byte)) & 0xFF) as usize;
            self.state = (self.state >> 8) ^ TABLE[index];
        }
    }

    /// Returns the checksum of everything fed so far. The state is not consumed.
    pub fn finalize(&self) -> u32 {
        self.state ^ FINAL_XOR
    }

    pub fn reset(&mut self) {
        self.state = INIT;
    }
}

/// One-shot CRC-32 of `data`.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(data);
    crc.finalize()
}
