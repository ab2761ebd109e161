//! compression/codecs/mod.rs
//! Concrete `Codec` back-ends.

pub mod lzo;

pub use lzo::Lzo1x;
