//! Chain parameters module - genesis construction, per-network constants,
//! parameter registry and network selection

mod genesis;
mod params;
mod registry;
mod seeds;

pub use genesis::*;
pub use params::*;
pub use registry::*;
pub use seeds::*;
