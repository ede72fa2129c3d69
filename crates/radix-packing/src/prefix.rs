use radix_core::Capacity;

/// Every prefix of `remaining` whose product fits, shortest first, as `(len, product)`.
///
/// Stops at the first base that would overflow the capacity.
pub(crate) fn fitting_prefixes(
    remaining: &[u64],
    capacity: Capacity,
) -> impl Iterator<Item = (usize, u64)> + '_ {
    remaining
        .iter()
        .scan(1u128, move |product, &base| {
            // The previous product fit in 64 bits, so this cannot overflow u128.
            *product *= base as u128;
            capacity.fits(*product).then_some(*product as u64)
        })
        .enumerate()
        .map(|(i, product)| (i + 1, product))
}
