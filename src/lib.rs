pub mod channel;
pub mod ecc;
pub mod error;
pub mod hashing;

pub use channel::{NoiseModel, Noiseless, QuadrupleBitNoise, SingleBitNoise};
pub use ecc::{Decoded, DecodedMessage, EncodedStream, HammingCode, TrailingPadding};
pub use error::{Error, Result};
