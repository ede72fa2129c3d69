use num_bigint::BigUint;
use num_traits::One;

use radix_core::errors::{RadixError, RadixResult};
use radix_core::{bit_length_big, Chunk};

/// `Σ_{x=m}^{n} Π_{y=0}^{x-1} bases[y]`: the prefix products of lengths `m..=n`, summed.
///
/// `x = 0` contributes the empty product, 1. Requires `m <= n <= bases.len()`.
pub fn boundary_weight(bases: &[u64], m: usize, n: usize) -> RadixResult<BigUint> {
    if m > n {
        return Err(RadixError::InvalidRange {
            start: m as u64,
            end: n as u64,
            reason: "start after end".to_string(),
        });
    }
    if n > bases.len() {
        return Err(RadixError::InvalidRange {
            start: m as u64,
            end: n as u64,
            reason: format!("end past sequence of {} bases", bases.len()),
        });
    }

    let mut prefix = BigUint::one();
    let mut sum = BigUint::default();
    for x in 0..=n {
        if x >= m {
            sum += &prefix;
        }
        if x < n {
            prefix *= bases[x];
        }
    }
    Ok(sum)
}

/// Number of states one word needs to hold both a value of `chunk` and which
/// of its prefix lengths `1..=len` was used.
pub fn chunk_boundary_weight(chunk: &Chunk) -> BigUint {
    let bases = chunk.bases();
    let mut prefix = BigUint::one();
    let mut sum = BigUint::default();
    for &base in bases {
        prefix *= base;
        sum += &prefix;
    }
    sum
}

/// Total bits when every chunk is stored through its [`chunk_boundary_weight`].
pub fn self_describing_bits<'a>(chunks: impl IntoIterator<Item = &'a Chunk>) -> u64 {
    chunks
        .into_iter()
        .map(|c| bit_length_big(&chunk_boundary_weight(c)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_prefix_products() {
        // 1 + 3 + 12 + 60
        assert_eq!(boundary_weight(&[3, 4, 5], 0, 3).unwrap(), BigUint::from(76u32));
        assert_eq!(boundary_weight(&[3, 4, 5], 1, 3).unwrap(), BigUint::from(75u32));
        assert_eq!(boundary_weight(&[3, 4, 5], 2, 2).unwrap(), BigUint::from(12u32));
    }

    #[test]
    fn chunk_weight_matches_range_form() {
        let chunk = Chunk::new(vec![3, 4, 5]).unwrap();
        assert_eq!(
            chunk_boundary_weight(&chunk),
            boundary_weight(chunk.bases(), 1, chunk.len()).unwrap()
        );
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(boundary_weight(&[3, 4], 2, 1).is_err());
        assert!(boundary_weight(&[3, 4], 0, 3).is_err());
    }

    #[test]
    fn grows_past_a_machine_word() {
        let bases = vec![u32::MAX as u64; 8];
        let weight = boundary_weight(&bases, 0, 8).unwrap();
        assert!(weight.bits() > 250);
    }
}
