//! Peony Credit (PNY) Chain Parameters Core
//!
//! Defines the immutable per-network parameter sets (main, testnet, regtest)
//! that fix a node's chain identity: message-start bytes, ports, proof-of-work
//! limits, address prefixes, seed nodes, and the genesis block each chain
//! must build upon. Every other subsystem reads its configuration from here.

use uint::construct_uint;

pub mod chain;
pub mod crypto;
pub mod primitives;

construct_uint! {
    /// 256-bit unsigned integer used for proof-of-work target bounds
    pub struct U256(4);
}

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: u64 = 100_000_000;

    /// Subsidy paid by the genesis coinbase output
    pub const GENESIS_REWARD: u64 = 100 * COIN;

    /// Default block-count interval at which the block subsidy halves
    pub const SUBSIDY_HALVING_INTERVAL: u64 = 210_000;

    /// Block version used for the genesis headers
    pub const GENESIS_BLOCK_VERSION: u32 = 2;

    /// Chain ticker (short form for addresses and logos)
    pub const COIN_TICKER: &str = "PNY";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "Peony Credit";
}
