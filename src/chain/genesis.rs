//! Genesis block construction
//!
//! Builds the byte-exact first block of a network from literal constants.
//! The coinbase input script embeds a human-readable timestamp string
//! instead of a real unlock script; the single output pays a fixed subsidy
//! to a fixed public key that is unspendable in practice, since the genesis
//! coinbase is never entered into the transaction index.

use crate::crypto::{compute_merkle_root, Hash};
use crate::primitives::{
    Block, BlockHeader, Script, Transaction, TxInput, TxOutput, COINBASE_OUTPUT_INDEX,
    OP_CHECKSIG, SEQUENCE_FINAL,
};

/// First value pushed into the coinbase script (0x1d00ffff, kept from the
/// ancestral chain's coinbase convention)
const COINBASE_SCRIPT_BITS: i64 = 486_604_799;

/// Second value pushed into the coinbase script
const COINBASE_SCRIPT_TAG: i64 = 4;

/// Literal inputs that uniquely determine a network's genesis block
///
/// Identical configs always yield identical blocks and hashes; there is no
/// failure mode here. Correctness is asserted by the parameter set that owns
/// the expected hash constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisConfig {
    /// Human-readable timestamp string embedded in the coinbase input
    pub timestamp_text: &'static str,
    /// Subsidy paid by the coinbase output, in base units
    pub reward: u64,
    /// Public key the coinbase output pays to (hex, uncompressed EC point)
    pub payee_pubkey_hex: &'static str,
    /// Header version
    pub version: u32,
    /// Header timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Compact difficulty bits
    pub bits: u32,
    /// Proof-of-work nonce
    pub nonce: u32,
}

impl GenesisConfig {
    /// Build the genesis block: one coinbase transaction, merkle root
    /// computed from the single-element transaction list, previous hash zero.
    pub fn build(&self) -> Block {
        let payee = hex::decode(self.payee_pubkey_hex).unwrap_or_default();

        let coinbase = Transaction {
            version: 1,
            inputs: vec![TxInput {
                prev_tx_hash: Hash::zero(),
                output_index: COINBASE_OUTPUT_INDEX,
                script_sig: Script::new()
                    .push_int(COINBASE_SCRIPT_BITS)
                    .push_int(COINBASE_SCRIPT_TAG)
                    .push_data(self.timestamp_text.as_bytes())
                    .into_bytes(),
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TxOutput {
                value: self.reward,
                script_pubkey: Script::new()
                    .push_data(&payee)
                    .push_opcode(OP_CHECKSIG)
                    .into_bytes(),
            }],
            lock_time: 0,
        };

        let merkle_root = compute_merkle_root(&[coinbase.hash()]);

        let header = BlockHeader::new(
            self.version,
            Hash::zero(),
            merkle_root,
            self.time,
            self.bits,
            self.nonce,
        );

        Block::new(header, vec![coinbase])
    }
}
