use std::iter::FusedIterator;
use std::mem;

use radix_core::errors::{RadixError, RadixResult};
use radix_core::{validate_base, Capacity, Chunk, IPacker};
use radix_observability::events;

use crate::prefix::fitting_prefixes;

const NAME: &str = "max";

/// Stream `bases` into maximal 64-bit chunks.
pub fn pack_max<I>(bases: I) -> MaxPacker<I::IntoIter>
where
    I: IntoIterator<Item = u128>,
{
    MaxPacker::with_capacity(bases, Capacity::WORD64)
}

/// Capacity-greedy packer over a possibly unbounded base stream.
///
/// Pulls one base at a time and only buffers the chunk in progress. A chunk is
/// emitted when the next base would push its product past the capacity; the
/// final partial chunk is emitted once the input ends.
///
/// Bases are validated as they are pulled. The first invalid base yields a
/// single `Err` (discarding the chunk in progress), after which the packer is
/// exhausted.
pub struct MaxPacker<I> {
    bases: I,
    capacity: Capacity,
    /// Index of the next base to pull.
    index: usize,
    /// Index of the first base in `chunk`.
    offset: usize,
    current: u128,
    chunk: Vec<u64>,
    done: bool,
}

impl<I> MaxPacker<I>
where
    I: Iterator<Item = u128>,
{
    pub fn with_capacity<T>(bases: T, capacity: Capacity) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = u128>,
    {
        Self {
            bases: bases.into_iter(),
            capacity,
            index: 0,
            offset: 0,
            current: 1,
            chunk: Vec::new(),
            done: false,
        }
    }

    fn emit(&self, offset: usize, bases: Vec<u64>) -> RadixResult<Chunk> {
        let chunk = Chunk::with_capacity(bases, self.capacity)?;
        events::chunk_emitted(NAME, offset, chunk.len(), chunk.product(), chunk.bit_cost());
        Ok(chunk)
    }
}

impl<I> Iterator for MaxPacker<I>
where
    I: Iterator<Item = u128>,
{
    type Item = RadixResult<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(raw) = self.bases.next() {
            let index = self.index;
            self.index += 1;

            let base = match validate_base(index, raw, self.capacity) {
                Ok(base) => base,
                Err(e) => {
                    events::input_rejected(NAME, &e.to_string());
                    self.done = true;
                    self.chunk.clear();
                    return Some(Err(e));
                }
            };

            let next = self.current * base as u128;
            if self.capacity.fits(next) {
                self.current = next;
                self.chunk.push(base);
            } else {
                // A validated base always fits an empty chunk, so `chunk` is non-empty here.
                let full = mem::replace(&mut self.chunk, vec![base]);
                let offset = mem::replace(&mut self.offset, index);
                self.current = base as u128;
                return Some(self.emit(offset, full));
            }
        }

        self.done = true;
        if self.chunk.is_empty() {
            return None;
        }
        let last = mem::take(&mut self.chunk);
        Some(self.emit(self.offset, last))
    }
}

impl<I> FusedIterator for MaxPacker<I> where I: Iterator<Item = u128> {}

/// [`IPacker`] form of the capacity-greedy rule: the longest fitting prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxStrategy {
    capacity: Capacity,
}

impl MaxStrategy {
    pub fn new(capacity: Capacity) -> Self {
        Self { capacity }
    }
}

impl IPacker for MaxStrategy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn next_chunk<'a>(&self, remaining: &'a [u64]) -> RadixResult<(Chunk, &'a [u64])> {
        let Some((len, _)) = fitting_prefixes(remaining, self.capacity).last() else {
            return Err(leading_base_error(remaining, self.capacity));
        };
        let (head, rest) = remaining.split_at(len);
        Ok((Chunk::with_capacity(head.to_vec(), self.capacity)?, rest))
    }
}

/// Error for a suffix whose first base cannot start a chunk.
pub(crate) fn leading_base_error(remaining: &[u64], capacity: Capacity) -> RadixError {
    match remaining.first() {
        Some(&base) => RadixError::CapacityViolation {
            index: 0,
            base: base as u128,
            word_bits: capacity.word_bits(),
        },
        None => RadixError::EmptyChunk,
    }
}
