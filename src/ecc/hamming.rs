//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! A codeword carries `mode` data bits and the smallest number of parity bits `r` for which
//! `2^r >= mode + r + 1`, which is enough to give every bit position its own parity fingerprint.
//! Any single flipped bit per codeword is corrected; heavier damage is either detected (the
//! syndrome points outside the codeword) or silently miscorrected.
//!
//! This implementation provides:
//! - Framing of arbitrary byte messages into `mode`-bit blocks, zero padding the last one
//! - Encoding to a flat [`EncodedStream`] of concatenated codewords
//! - Decoding with single-bit correction and a count of detected-uncorrectable codewords
//! - A configurable policy for trimming the zero padding added by framing
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Digital broadcasting
//! - Data storage systems

use crate::ecc::bits::{bits_to_bytes, bytes_to_bits, BitStream};
use crate::ecc::stream::EncodedStream;
use crate::ecc::syndrome::{self, is_parity_position, Correction};
use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use log::{debug, trace, warn};
use std::borrow::Cow;
use std::string::FromUtf8Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the decoder treats the zero bytes that framing may leave after the message.
///
/// Encoding pads the bit stream with fewer than `mode` zero bits so that it
/// splits into whole blocks. When `mode` is larger than eight, that padding
/// can decode into whole `0x00` bytes after the real message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPadding {
    /// Drop trailing zero bytes that can only have come from block padding.
    ///
    /// A message ending in `0x00` bytes inside the padding window is
    /// indistinguishable from its padding and loses those bytes.
    #[default]
    StripZeros,
    /// Return every whole byte recovered from the data blocks.
    Keep,
    /// Drop exactly this many trailing bytes.
    Fixed(usize),
}

/// Represents a Hamming code configuration.
/// A Hamming(m,r) code encodes m data bits with r parity bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingCode {
    /// Number of data bits per block
    data_bits: usize,
    /// Number of parity bits per block
    parity_bits: usize,
    /// What to do with block padding after decoding
    padding: TrailingPadding,
}

/// Text recovered by the decoder, or the raw bytes when they are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedMessage {
    Text(String),
    Raw(FromUtf8Error),
}

impl DecodedMessage {
    fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => DecodedMessage::Text(text),
            Err(e) => {
                debug!("Recovered bytes are not valid UTF-8: {}", e);
                DecodedMessage::Raw(e)
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            DecodedMessage::Text(text) => text.as_bytes(),
            DecodedMessage::Raw(e) => e.as_bytes(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodedMessage::Text(text) => Some(text),
            DecodedMessage::Raw(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DecodedMessage::Text(_))
    }

    /// Converts to text, replacing invalid sequences with U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            DecodedMessage::Text(text) => Cow::Borrowed(text),
            DecodedMessage::Raw(e) => String::from_utf8_lossy(e.as_bytes()),
        }
    }

    /// Consumes the message and returns it as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TextDecode`] if the recovered bytes are not valid UTF-8.
    pub fn into_text(self) -> Result<String> {
        match self {
            DecodedMessage::Text(text) => Ok(text),
            DecodedMessage::Raw(e) => Err(Error::TextDecode(e)),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            DecodedMessage::Text(text) => text.into_bytes(),
            DecodedMessage::Raw(e) => e.into_bytes(),
        }
    }
}

/// Result of decoding an [`EncodedStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered message.
    pub message: DecodedMessage,
    /// Codewords whose syndrome pointed outside the codeword and were left as received.
    pub uncorrectable: usize,
    /// Codewords in which a single bit was flipped back. Informational only: a
    /// codeword hit by an even number of flips can land here too.
    pub corrected: usize,
}

impl HammingCode {
    /// Creates a new Hamming code configuration.
    ///
    /// # Arguments
    ///
    /// * `data_bits` - Number of data bits to encode in each block (the `mode`)
    ///
    /// # Returns
    ///
    /// A new `HammingCode` instance or an error if invalid parameters
    pub fn new(data_bits: usize) -> Result<Self> {
        if data_bits == 0 {
            return Err(Error::InvalidMode(data_bits));
        }

        // Determine required number of parity bits, where 2^r - r - 1 >= data_bits
        let mut parity_bits = 2;
        while (1usize << parity_bits) - parity_bits - 1 < data_bits {
            parity_bits += 1;
            if parity_bits >= usize::BITS as usize {
                return Err(Error::InvalidMode(data_bits));
            }
        }

        Ok(HammingCode {
            data_bits,
            parity_bits,
            padding: TrailingPadding::default(),
        })
    }

    /// Creates the perfect Hamming code with `parity_bits` parity bits,
    /// i.e. `(2^r - 1, 2^r - r - 1)`.
    pub fn from_parity_bits(parity_bits: usize) -> Result<Self> {
        if parity_bits < 2 || parity_bits >= usize::BITS as usize {
            return Err(Error::InvalidParityCount(parity_bits));
        }
        Self::new((1usize << parity_bits) - parity_bits - 1)
    }

    /// Creates a standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        HammingCode {
            data_bits: 4,
            parity_bits: 3,
            padding: TrailingPadding::default(),
        }
    }

    /// Sets the policy for trimming framing padding after decoding.
    pub fn with_trailing_padding(mut self, padding: TrailingPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Number of data bits per block
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Number of parity bits per block
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    pub fn trailing_padding(&self) -> TrailingPadding {
        self.padding
    }

    /// Gets the total code word length (data bits + parity bits)
    pub fn total_bits(&self) -> usize {
        self.data_bits + self.parity_bits
    }

    /// Gets the number of codewords needed for a message of `input_bytes` bytes
    pub fn block_count(&self, input_bytes: usize) -> usize {
        (input_bytes * 8).div_ceil(self.data_bits)
    }

    /// Gets the length in bits of the encoded stream for `input_bytes` bytes
    pub fn encoded_bits_needed(&self, input_bytes: usize) -> usize {
        self.block_count(input_bytes) * self.total_bits()
    }

    /// Encodes a byte slice using the configured Hamming code
    ///
    /// # Arguments
    ///
    /// * `data` - Data to encode
    ///
    /// # Returns
    ///
    /// The concatenated codewords, `block_count * total_bits` bits long
    pub fn encode(&self, data: &[u8]) -> EncodedStream {
        let mut bits = bytes_to_bits(data);
        let blocks = bits.len().div_ceil(self.data_bits);

        // Zero pad to whole blocks
        bits.resize(blocks * self.data_bits, false);

        let codewords = map_blocks(blocks, |block_idx| {
            let start = block_idx * self.data_bits;
            self.encode_block(&bits[start..start + self.data_bits])
        });

        let mut encoded = BitStream::with_capacity(blocks * self.total_bits());
        for codeword in &codewords {
            encoded.extend_from_bitslice(codeword.as_bitslice());
        }

        debug!(
            "Encoded {} bytes into {} codewords of {} bits ({} data, {} parity)",
            data.len(),
            blocks,
            self.total_bits(),
            self.data_bits,
            self.parity_bits
        );

        EncodedStream::from_bits(encoded)
    }

    /// Encodes the UTF-8 bytes of `text`
    pub fn encode_str(&self, text: &str) -> EncodedStream {
        self.encode(text.as_bytes())
    }

    /// Frames one block of exactly `data_bits` bits and fills in its parity
    fn encode_block(&self, data_bits: &BitSlice<u8, Msb0>) -> BitStream {
        let mut codeword = bitvec![u8, Msb0; 0; self.total_bits()];

        // Data bits go to the non-parity positions, in order
        let data_positions = (1..=self.total_bits()).filter(|&p| !is_parity_position(p));
        for (position, bit) in data_positions.zip(data_bits.iter().by_vals()) {
            codeword.set(position - 1, bit);
        }

        syndrome::apply_parity(self.parity_bits, &mut codeword);
        codeword
    }

    /// Decodes Hamming-encoded data, correcting single-bit errors
    ///
    /// # Arguments
    ///
    /// * `encoded` - Stream produced by an encoder configured with the same `mode`
    ///
    /// # Returns
    ///
    /// The recovered message and the number of codewords found damaged beyond
    /// repair. A nonzero count means the message should not be trusted.
    pub fn decode(&self, encoded: &EncodedStream) -> Result<Decoded> {
        let blocks = encoded.codeword_count(self)?;
        let encoded_bits = encoded.as_bitslice();
        let total_bits = self.total_bits();

        let decoded_blocks = map_blocks(blocks, |block_idx| {
            let start = block_idx * total_bits;
            self.decode_block(&encoded_bits[start..start + total_bits])
        })
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

        let mut data = BitStream::with_capacity(blocks * self.data_bits);
        let mut uncorrectable = 0;
        let mut corrected = 0;

        for (block_idx, (block, correction)) in decoded_blocks.iter().enumerate() {
            match correction {
                Correction::Clean => {}
                Correction::Corrected { position } => {
                    trace!("Codeword {}: corrected bit {}", block_idx, position);
                    corrected += 1;
                }
                Correction::Uncorrectable { syndrome } => {
                    trace!("Codeword {}: syndrome {} out of range", block_idx, syndrome);
                    uncorrectable += 1;
                }
            }
            data.extend_from_bitslice(block.as_bitslice());
        }

        let mut bytes = bits_to_bytes(&data);
        self.trim_padding(&mut bytes, data.len());

        debug!(
            "Decoded {} codewords into {} bytes, {} corrected",
            blocks,
            bytes.len(),
            corrected
        );
        if uncorrectable > 0 {
            warn!(
                "{} of {} codewords had uncorrectable errors",
                uncorrectable, blocks
            );
        }

        Ok(Decoded {
            message: DecodedMessage::from_bytes(bytes),
            uncorrectable,
            corrected,
        })
    }

    /// Corrects one codeword in a scratch buffer and strips its parity bits
    fn decode_block(&self, encoded: &BitSlice<u8, Msb0>) -> Result<(BitStream, Correction)> {
        let mut codeword = encoded.to_bitvec();
        let correction = syndrome::correct(self, &mut codeword)?;

        let data: BitStream = codeword
            .iter()
            .by_vals()
            .enumerate()
            .filter(|&(index, _)| !is_parity_position(index + 1))
            .map(|(_, bit)| bit)
            .collect();

        Ok((data, correction))
    }

    fn trim_padding(&self, bytes: &mut Vec<u8>, data_bits: usize) {
        match self.padding {
            TrailingPadding::Keep => {}
            TrailingPadding::Fixed(count) => {
                bytes.truncate(bytes.len().saturating_sub(count));
            }
            TrailingPadding::StripZeros => {
                if data_bits < self.data_bits {
                    return;
                }
                // Padding is shorter than one block, so the message is at least this long
                let floor = ((data_bits - self.data_bits) / 8 + 1).min(bytes.len());
                let mut end = bytes.len();
                while end > floor && bytes[end - 1] == 0 {
                    end -= 1;
                }
                bytes.truncate(end);
            }
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn map_blocks<T, F>(blocks: usize, f: F) -> Vec<T>
where
    F: Fn(usize) -> T,
{
    (0..blocks).map(f).collect()
}

#[cfg(feature = "parallel")]
fn map_blocks<T, F>(blocks: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    (0..blocks).into_par_iter().map(f).collect()
}

/// Creates a standard (7,4) Hamming code
pub fn create_hamming_7_4() -> HammingCode {
    HammingCode::standard_7_4()
}

/// Creates a Hamming code carrying `data_bits` data bits per codeword
pub fn create_hamming(data_bits: usize) -> Result<HammingCode> {
    HammingCode::new(data_bits)
}

/// Encodes text using a Hamming code with `mode` data bits per block
pub fn hamming_encode(text: &str, mode: usize) -> Result<EncodedStream> {
    Ok(create_hamming(mode)?.encode_str(text))
}

/// Decodes a wire string using a Hamming code with `mode` data bits per block
pub fn hamming_decode(wire: &str, mode: usize) -> Result<Decoded> {
    let code = create_hamming(mode)?;
    let stream: EncodedStream = wire.parse()?;
    code.decode(&stream)
}
