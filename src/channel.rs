//! Noisy channel simulation.
//!
//! A channel takes an [`EncodedStream`] and returns a corrupted copy of it,
//! flipping bits independently inside each codeword. The models in [`noise`]
//! range from a clean channel to damage well past what a single-error
//! correcting code can repair.
//!
//! # Examples
//!
//! ```rust
//! use hamming_sim::channel::{NoiseModel, SingleBitNoise};
//! use hamming_sim::ecc::HammingCode;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let code = HammingCode::new(8).unwrap();
//! let encoded = code.encode_str("noise");
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let noisy = SingleBitNoise.apply(&encoded, &code, &mut rng).unwrap();
//! assert_ne!(noisy, encoded);
//!
//! let decoded = code.decode(&noisy).unwrap();
//! assert_eq!(decoded.message.as_text(), Some("noise"));
//! ```

use crate::ecc::{EncodedStream, HammingCode, Result};
use rand::RngCore;

/// Trait for channel noise models
pub trait NoiseModel {
    /// Number of random bit flips applied to every codeword
    fn flips_per_codeword(&self) -> usize;

    /// Short human readable name, used in reports
    fn name(&self) -> &'static str;

    /// Returns a corrupted copy of `stream`; the input is left untouched.
    fn apply(
        &self,
        stream: &EncodedStream,
        code: &HammingCode,
        rng: &mut dyn RngCore,
    ) -> Result<EncodedStream> {
        noise::inject_flips(stream, code, self.flips_per_codeword(), rng)
    }
}

pub mod noise;
pub use noise::{
    inject_flips, inject_quadruple, inject_single, MultiBitNoise, Noiseless, QuadrupleBitNoise,
    SingleBitNoise,
};
