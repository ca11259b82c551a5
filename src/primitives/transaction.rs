//! Transaction structure and canonical serialization
//!
//! Script-carrying inputs and outputs; the little-endian byte layout of
//! `to_bytes` defines transaction identity and therefore the merkle roots
//! the chain parameters assert against.

use crate::crypto::{hash_bytes, Hash};
use serde::{Deserialize, Serialize};

/// Output index marking a coinbase input
pub const COINBASE_OUTPUT_INDEX: u32 = 0xFFFF_FFFF;

/// Sequence number for inputs that opt out of replacement
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// A transaction input referencing a previous output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Hash of the transaction containing the output
    pub prev_tx_hash: Hash,
    /// Index of the output in that transaction
    pub output_index: u32,
    /// Unlock script (arbitrary bytes in a coinbase)
    pub script_sig: Vec<u8>,
    /// Sequence number
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount in base units
    pub value: u64,
    /// Lock script the spender must satisfy
    pub script_pubkey: Vec<u8>,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction version
    pub version: u32,
    /// Transaction inputs
    pub inputs: Vec<TxInput>,
    /// Transaction outputs
    pub outputs: Vec<TxOutput>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1
            && self.inputs[0].prev_tx_hash == Hash::zero()
            && self.inputs[0].output_index == COINBASE_OUTPUT_INDEX
    }

    /// Calculate the transaction hash
    pub fn hash(&self) -> Hash {
        hash_bytes(&self.to_bytes())
    }

    /// Canonical serialization
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());

        bytes.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_tx_hash.0);
            bytes.extend_from_slice(&input.output_index.to_le_bytes());
            bytes.extend_from_slice(&(input.script_sig.len() as u32).to_le_bytes());
            bytes.extend_from_slice(&input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        bytes.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            bytes.extend_from_slice(&(output.script_pubkey.len() as u32).to_le_bytes());
            bytes.extend_from_slice(&output.script_pubkey);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());

        bytes
    }
}
