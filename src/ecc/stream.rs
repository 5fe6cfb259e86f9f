//! The wire form of an encoded message.
//!
//! An [`EncodedStream`] is the concatenation of every codeword produced by the
//! encoder. On the wire it is a flat string of `'0'` and `'1'` characters with
//! no delimiters or length header: the receiver must know the code's `mode` to
//! find the codeword boundaries again.

use crate::ecc::bits::BitStream;
use crate::ecc::hamming::HammingCode;
use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Concatenated codewords, as produced by [`HammingCode::encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedStream {
    bits: BitStream,
}

impl EncodedStream {
    /// Wraps a raw bit sequence.
    pub fn from_bits(bits: BitStream) -> Self {
        Self { bits }
    }

    /// Number of bits in the stream.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub fn into_bits(self) -> BitStream {
        self.bits
    }

    /// Number of whole codewords in the stream under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedStream`] if the stream length is not a
    /// multiple of the codeword length.
    pub fn codeword_count(&self, code: &HammingCode) -> Result<usize> {
        let codeword_len = code.total_bits();
        if self.bits.len() % codeword_len != 0 {
            return Err(Error::MalformedStream {
                length: self.bits.len(),
                codeword_len,
            });
        }
        Ok(self.bits.len() / codeword_len)
    }

    /// Iterates over the codewords of the stream under `code`.
    pub fn codewords(&self, code: &HammingCode) -> Result<impl Iterator<Item = &BitSlice<u8, Msb0>>> {
        self.codeword_count(code)?;
        Ok(self.bits.chunks_exact(code.total_bits()))
    }
}

impl From<BitStream> for EncodedStream {
    fn from(bits: BitStream) -> Self {
        Self::from_bits(bits)
    }
}

impl fmt::Display for EncodedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for EncodedStream {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitStream::with_capacity(s.len());
        for (position, symbol) in s.chars().enumerate() {
            match symbol {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(Error::InvalidSymbol { position, symbol }),
            }
        }
        Ok(Self { bits })
    }
}
