mod packer;

pub use packer::IPacker;
