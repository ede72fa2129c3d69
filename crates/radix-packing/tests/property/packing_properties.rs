use proptest::prelude::*;
use radix_core::{density, Capacity, Chunk};
use radix_packing::{DensePacker, MaxPacker};

/// Bases spread over many magnitudes so chunks see both long and short runs.
fn arb_base() -> impl Strategy<Value = u128> {
    prop_oneof![
        2u128..16,
        16u128..65_536,
        65_536u128..(1u128 << 40),
        (1u128 << 40)..(1u128 << 64),
    ]
}

fn arb_bases() -> impl Strategy<Value = Vec<u128>> {
    prop::collection::vec(arb_base(), 0..60)
}

fn arb_capacity() -> impl Strategy<Value = Capacity> {
    prop_oneof![Just(64u32), 40u32..64]
        .prop_map(|bits| Capacity::new(bits).unwrap())
}

fn fits(bases: &[u128], capacity: Capacity) -> Vec<u128> {
    bases.iter().copied().filter(|&b| capacity.fits(b)).collect()
}

fn max_chunks(bases: &[u128], capacity: Capacity) -> Vec<Chunk> {
    MaxPacker::with_capacity(bases.to_vec(), capacity)
        .collect::<Result<_, _>>()
        .unwrap()
}

fn dense_chunks(bases: &[u128], capacity: Capacity) -> Vec<Chunk> {
    DensePacker::with_capacity(bases, capacity)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn concat(chunks: &[Chunk]) -> Vec<u128> {
    chunks
        .iter()
        .flat_map(|c| c.bases().iter().map(|&b| b as u128))
        .collect()
}

proptest! {
    #[test]
    fn max_concatenation_reconstructs_input(bases in arb_bases(), capacity in arb_capacity()) {
        let bases = fits(&bases, capacity);
        prop_assert_eq!(concat(&max_chunks(&bases, capacity)), bases);
    }

    #[test]
    fn dense_concatenation_reconstructs_input(bases in arb_bases(), capacity in arb_capacity()) {
        let bases = fits(&bases, capacity);
        let chunks: Vec<Chunk> = dense_chunks(&bases, capacity);
        prop_assert_eq!(concat(&chunks), bases);
    }

    #[test]
    fn every_chunk_fits_capacity(bases in arb_bases(), capacity in arb_capacity()) {
        let bases = fits(&bases, capacity);
        let dense: Vec<Chunk> = dense_chunks(&bases, capacity);
        for chunk in max_chunks(&bases, capacity).iter().chain(dense.iter()) {
            prop_assert!(!chunk.is_empty());
            prop_assert!(capacity.fits(chunk.product() as u128));
        }
    }

    #[test]
    fn max_chunks_are_maximal(bases in arb_bases(), capacity in arb_capacity()) {
        let bases = fits(&bases, capacity);
        let chunks = max_chunks(&bases, capacity);
        let mut offset = 0;
        for chunk in &chunks {
            offset += chunk.len();
            if let Some(&next) = bases.get(offset) {
                prop_assert!(!capacity.fits(chunk.product() as u128 * next));
            }
        }
    }

    #[test]
    fn dense_chunks_are_locally_optimal(bases in arb_bases(), capacity in arb_capacity()) {
        let bases = fits(&bases, capacity);
        let chunks: Vec<Chunk> = dense_chunks(&bases, capacity);
        let mut offset = 0;
        for chunk in &chunks {
            let chosen = chunk.density();
            let mut product: u128 = 1;
            for (i, &base) in bases[offset..].iter().enumerate() {
                product *= base;
                if !capacity.fits(product) {
                    break;
                }
                let other = density(product as u64).unwrap();
                prop_assert!(other <= chosen, "prefix {} beats chosen {}", other, chosen);
                if other == chosen {
                    // Ties resolve to the shortest prefix.
                    prop_assert!(i + 1 >= chunk.len());
                }
            }
            offset += chunk.len();
        }
    }

    #[test]
    fn max_never_needs_more_words_than_dense(bases in arb_bases()) {
        let bases = fits(&bases, Capacity::WORD64);
        let max = max_chunks(&bases, Capacity::WORD64).len();
        let dense = dense_chunks(&bases, Capacity::WORD64).len();
        prop_assert!(max <= dense);
    }
}
