use serde::{Deserialize, Serialize};

use super::Chunk;

/// An ordered partition of a base sequence into chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Packing {
    chunks: Vec<Chunk>,
}

impl Packing {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Number of chunks (words).
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of bases covered.
    pub fn coverage(&self) -> usize {
        self.chunks.iter().map(Chunk::len).sum()
    }

    /// Concatenation of every chunk, in order.
    pub fn bases(&self) -> Vec<u64> {
        self.chunks
            .iter()
            .flat_map(|c| c.bases().iter().copied())
            .collect()
    }

    /// Sum of each chunk's bit cost.
    pub fn total_bits(&self) -> u64 {
        self.chunks.iter().map(|c| c.bit_cost() as u64).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }
}

impl FromIterator<Chunk> for Packing {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Packing {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
