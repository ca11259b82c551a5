//! Cryptography module - double-SHA-256 hashing, merkle roots, base58check

mod address;
mod hash;
mod merkle;

pub use address::*;
pub use hash::*;
pub use merkle::*;
