//! Composition of mixed-radix digits into packed words.
//!
//! Digits are combined most significant first: `value = value * base + digit`.
//! A chunk's word is therefore always below its product.

use radix_core::errors::{RadixError, RadixResult};
use radix_core::{Chunk, Packing};

/// Encode one digit per base of `chunk` into a single word.
pub fn encode_chunk(chunk: &Chunk, digits: &[u64]) -> RadixResult<u64> {
    if digits.len() != chunk.len() {
        return Err(RadixError::DigitCountMismatch {
            expected: chunk.len(),
            actual: digits.len(),
        });
    }

    let mut value: u64 = 0;
    for (position, (&digit, &base)) in digits.iter().zip(chunk.bases()).enumerate() {
        if digit >= base {
            return Err(RadixError::DigitOutOfRange {
                position,
                digit,
                base,
            });
        }
        // value < product of the bases so far, so this stays below chunk.product().
        value = value * base + digit;
    }
    Ok(value)
}

/// Encode a full digit sequence, one word per chunk of `packing`.
pub fn encode_packing(packing: &Packing, digits: &[u64]) -> RadixResult<Vec<u64>> {
    if digits.len() != packing.coverage() {
        return Err(RadixError::DigitCountMismatch {
            expected: packing.coverage(),
            actual: digits.len(),
        });
    }

    let mut words = Vec::with_capacity(packing.len());
    let mut offset = 0;
    for chunk in packing {
        let end = offset + chunk.len();
        let word = encode_chunk(chunk, &digits[offset..end]).map_err(|e| match e {
            RadixError::DigitOutOfRange {
                position,
                digit,
                base,
            } => RadixError::DigitOutOfRange {
                position: offset + position,
                digit,
                base,
            },
            other => other,
        })?;
        words.push(word);
        offset = end;
    }
    Ok(words)
}
