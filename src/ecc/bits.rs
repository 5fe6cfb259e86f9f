//! Conversion between byte messages and flat bit sequences.
//!
//! Bits are ordered most-significant first within each byte, so the byte
//! `0b0100_0001` becomes the sequence `0, 1, 0, 0, 0, 0, 0, 1`.

use bitvec::prelude::*;

/// An owned, MSB-first sequence of bits.
pub type BitStream = BitVec<u8, Msb0>;

/// Expands `bytes` into a bit sequence of length `8 * bytes.len()`.
pub fn bytes_to_bits(bytes: &[u8]) -> BitStream {
    bytes.view_bits::<Msb0>().to_bitvec()
}

/// Expands the UTF-8 encoding of `text` into a bit sequence.
pub fn text_to_bits(text: &str) -> BitStream {
    bytes_to_bits(text.as_bytes())
}

/// Packs bits back into bytes, eight at a time.
///
/// A trailing group of fewer than eight bits cannot form a byte and is
/// dropped; callers that need exact round trips pass a length that is a
/// multiple of eight.
pub fn bits_to_bytes(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|byte| {
            byte.iter()
                .by_vals()
                .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit))
        })
        .collect()
}
