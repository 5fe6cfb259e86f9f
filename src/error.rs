//! Error types shared by the codec, the wire format and the channel simulator.
//!
//! Structural problems with an input (wrong lengths, bad wire symbols, an
//! unusable configuration) are reported as [`Error`] values and abort the
//! call. Data corruption inside a codeword is not an error: it is reported
//! through [`crate::ecc::Correction`] and aggregated in a decode report.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A codec was configured with an unusable number of data bits per block.
    #[error("invalid mode {0}: a block must carry at least one data bit and fit a machine word of positions")]
    InvalidMode(usize),

    /// A perfect code was requested with too few or too many parity bits.
    #[error("invalid parity count {0}: expected between 2 and {max}", max = usize::BITS - 1)]
    InvalidParityCount(usize),

    /// A codeword handed to the syndrome engine has the wrong width.
    #[error("invalid codeword length: expected {expected} bits, got {actual}")]
    InvalidCodewordLength { expected: usize, actual: usize },

    /// An encoded stream cannot be split into whole codewords.
    #[error("malformed stream: {length} bits is not a multiple of the {codeword_len}-bit codeword")]
    MalformedStream { length: usize, codeword_len: usize },

    /// The wire form contained something other than '0' or '1'.
    #[error("invalid symbol {symbol:?} at position {position} in encoded stream")]
    InvalidSymbol { position: usize, symbol: char },

    /// Recovered bytes are not valid UTF-8.
    #[error("recovered bytes are not valid UTF-8: {0}")]
    TextDecode(#[from] std::string::FromUtf8Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
