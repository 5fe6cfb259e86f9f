//! Integrity digests used to verify end-to-end transmission.
//!
//! These have no dependency on the codec: they are applied by the
//! demonstration harness to the original and the recovered text.

pub mod crc32;

pub use crc32::{crc32, Crc32};
