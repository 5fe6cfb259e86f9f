//! Bit-flip noise injectors.
//!
//! Every injector works codeword by codeword: for each codeword it draws
//! positions uniformly from `[0, total_bits)` and flips them. Draws are made
//! with replacement, so with more than one flip per codeword two draws can
//! land on the same bit and cancel out. The realized damage of
//! [`inject_quadruple`] is therefore anywhere from zero to four bits.

use crate::channel::NoiseModel;
use crate::ecc::{EncodedStream, HammingCode, Result};
use log::debug;
use rand::Rng;

/// Flips `flips` uniformly chosen bits (with replacement) in every codeword.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedStream`] if `stream` does not split into
/// whole codewords of `code`.
pub fn inject_flips<R: Rng + ?Sized>(
    stream: &EncodedStream,
    code: &HammingCode,
    flips: usize,
    rng: &mut R,
) -> Result<EncodedStream> {
    let blocks = stream.codeword_count(code)?;
    let total_bits = code.total_bits();
    let mut noisy = stream.as_bitslice().to_bitvec();

    for block_idx in 0..blocks {
        let start = block_idx * total_bits;
        for _ in 0..flips {
            let index = start + rng.gen_range(0..total_bits);
            let bit = noisy[index];
            noisy.set(index, !bit);
        }
    }

    debug!(
        "Injected {} flip(s) into each of {} codewords",
        flips, blocks
    );

    Ok(EncodedStream::from_bits(noisy))
}

/// Flips exactly one random bit in every codeword, which the code can always repair.
pub fn inject_single<R: Rng + ?Sized>(
    stream: &EncodedStream,
    code: &HammingCode,
    rng: &mut R,
) -> Result<EncodedStream> {
    inject_flips(stream, code, 1, rng)
}

/// Makes four independent random flips in every codeword.
pub fn inject_quadruple<R: Rng + ?Sized>(
    stream: &EncodedStream,
    code: &HammingCode,
    rng: &mut R,
) -> Result<EncodedStream> {
    inject_flips(stream, code, 4, rng)
}

/// A channel that delivers every bit intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noiseless;

/// One flipped bit per codeword.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleBitNoise;

/// Four independent flips per codeword.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadrupleBitNoise;

/// A fixed number of independent flips per codeword.
#[derive(Debug, Clone, Copy)]
pub struct MultiBitNoise {
    pub flips: usize,
}

impl NoiseModel for Noiseless {
    fn flips_per_codeword(&self) -> usize {
        0
    }

    fn name(&self) -> &'static str {
        "noiseless"
    }
}

impl NoiseModel for SingleBitNoise {
    fn flips_per_codeword(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "single-bit"
    }
}

impl NoiseModel for QuadrupleBitNoise {
    fn flips_per_codeword(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "quadruple-bit"
    }
}

impl NoiseModel for MultiBitNoise {
    fn flips_per_codeword(&self) -> usize {
        self.flips
    }

    fn name(&self) -> &'static str {
        "multi-bit"
    }
}
