//! Error correction code implementation.
//!
//! This module provides a systematic single-error-correcting Hamming code over
//! arbitrary-length byte messages:
//! - [`bits`]: byte <-> bit packing (MSB first)
//! - [`syndrome`]: the parity group scan shared by encoding and decoding
//! - [`hamming`]: block framing, parity insertion and removal
//! - [`stream`]: the `'0'`/`'1'` wire form of an encoded message
//!
//! # Examples
//!
//! ```rust
//! use hamming_sim::ecc::HammingCode;
//!
//! let code = HammingCode::new(8).unwrap();
//! let encoded = code.encode_str("Hi");
//! assert_eq!(encoded.len(), 2 * 12);
//!
//! let decoded = code.decode(&encoded).unwrap();
//! assert_eq!(decoded.message.as_text(), Some("Hi"));
//! assert_eq!(decoded.uncorrectable, 0);
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

pub mod bits;
pub mod hamming;
pub mod stream;
pub mod syndrome;

pub use bits::{bits_to_bytes, bytes_to_bits, text_to_bits, BitStream};
pub use hamming::{
    create_hamming, create_hamming_7_4, hamming_decode, hamming_encode, Decoded, DecodedMessage,
    HammingCode, TrailingPadding,
};
pub use stream::EncodedStream;
pub use syndrome::{correct, syndrome, write_parity, Correction};
