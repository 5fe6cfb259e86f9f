//! Algebraic properties of the codec, checked over generated inputs.

use hamming_sim::ecc::{
    bits_to_bytes, bytes_to_bits, correct, syndrome, Correction, HammingCode, TrailingPadding,
};
use proptest::prelude::*;

#[test]
fn parity_count_satisfies_hamming_bound_minimally() {
    for mode in 1..100_000usize {
        let r = HammingCode::new(mode).unwrap().parity_bits();
        assert!(1usize << r >= mode + r + 1, "mode {}", mode);
        assert!(1usize << (r - 1) < mode + (r - 1) + 1, "mode {}", mode);
    }
}

proptest! {
    #[test]
    fn text_round_trip(text in "\\PC*", mode in 1usize..=130) {
        let code = HammingCode::new(mode).unwrap();
        let decoded = code.decode(&code.encode_str(&text)).unwrap();
        prop_assert_eq!(decoded.message.as_text(), Some(text.as_str()));
        prop_assert_eq!(decoded.uncorrectable, 0);
        prop_assert_eq!(decoded.corrected, 0);
    }

    #[test]
    fn raw_round_trip_keeps_only_zero_padding(
        data in prop::collection::vec(any::<u8>(), 0..64),
        mode in 1usize..=130,
    ) {
        let code = HammingCode::new(mode)
            .unwrap()
            .with_trailing_padding(TrailingPadding::Keep);
        let encoded = code.encode(&data);
        prop_assert_eq!(encoded.len(), code.encoded_bits_needed(data.len()));

        let decoded = code.decode(&encoded).unwrap();
        let bytes = decoded.message.as_bytes();
        prop_assert_eq!(bytes.len(), code.block_count(data.len()) * mode / 8);
        prop_assert_eq!(&bytes[..data.len()], data.as_slice());
        prop_assert!(bytes[data.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn any_single_flip_is_corrected(
        data in prop::collection::vec(any::<u8>(), 1..32),
        mode in 1usize..=64,
        index in any::<prop::sample::Index>(),
    ) {
        let code = HammingCode::new(mode).unwrap();
        let encoded = code.encode(&data);
        let position = index.index(encoded.len());
        let block = position / code.total_bits();
        let offset = position % code.total_bits();

        let original = encoded.codewords(&code).unwrap().nth(block).unwrap().to_bitvec();
        prop_assert_eq!(syndrome(&code, &original).unwrap(), 0);

        let mut damaged = original.clone();
        let bit = damaged[offset];
        damaged.set(offset, !bit);

        let correction = correct(&code, &mut damaged).unwrap();
        prop_assert_eq!(correction, Correction::Corrected { position: offset + 1 });
        prop_assert_eq!(damaged, original);
    }

    #[test]
    fn bit_packing_round_trip(
        bits in (0usize..32).prop_flat_map(|n| prop::collection::vec(any::<bool>(), n * 8)),
    ) {
        let bits: hamming_sim::ecc::BitStream = bits.into_iter().collect();
        prop_assert_eq!(bytes_to_bits(&bits_to_bytes(&bits)), bits);
    }
}
