//! Primitive chain structures - scripts, transactions, blocks

mod block;
mod script;
mod transaction;

pub use block::*;
pub use script::*;
pub use transaction::*;
