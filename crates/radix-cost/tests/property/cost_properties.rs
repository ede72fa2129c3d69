use proptest::prelude::*;
use radix_core::{bit_length, Chunk};
use radix_cost::{baseline_bits, boundary_weight, chunk_boundary_weight, total_bits};
use radix_packing::pack_dense;

proptest! {
    #[test]
    fn packing_never_costs_more_than_baseline(bases in prop::collection::vec(2u64..1_000_000, 0..80)) {
        let raw: Vec<u128> = bases.iter().map(|&b| b as u128).collect();
        let chunks: Vec<Chunk> = pack_dense(&raw).unwrap().collect::<Result<_, _>>().unwrap();
        prop_assert!(total_bits(&chunks) <= baseline_bits(&bases));
    }

    #[test]
    fn chunk_cost_never_exceeds_its_bases(bases in prop::collection::vec(2u64..256, 1..8)) {
        let chunk = Chunk::new(bases.clone()).unwrap();
        let separate: u64 = bases.iter().map(|&b| bit_length(b) as u64).sum();
        prop_assert!(total_bits([&chunk]) <= separate);
    }

    #[test]
    fn weight_ranges_are_additive(
        bases in prop::collection::vec(2u64..1000, 1..20),
        split in 0usize..20,
    ) {
        let n = bases.len();
        let split = split.min(n - 1);
        let whole = boundary_weight(&bases, 0, n).unwrap();
        let left = boundary_weight(&bases, 0, split).unwrap();
        let right = boundary_weight(&bases, split + 1, n).unwrap();
        prop_assert_eq!(whole, left + right);
    }

    #[test]
    fn chunk_weight_is_below_twice_its_product(bases in prop::collection::vec(2u64..1000, 1..6)) {
        let chunk = Chunk::new(bases).unwrap();
        let weight = chunk_boundary_weight(&chunk);
        prop_assert!(weight >= num_bigint::BigUint::from(chunk.product()));
        prop_assert!(weight < num_bigint::BigUint::from(chunk.product()) * 2u32);
    }
}
