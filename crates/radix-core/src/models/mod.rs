mod chunk;
mod packing;

pub use chunk::Chunk;
pub use packing::Packing;
