//! Per-network chain parameters
//!
//! Single source of truth for the constants that fix a node's chain
//! identity. Each network is described by a plain `ChainSpec` constant
//! record; testnet derives from main and regtest from testnet by overriding
//! specific fields, mirroring how the networks are deliberately similar.
//! `ChainParams::from_spec` builds the genesis block and refuses to produce
//! a parameter set whose computed genesis hash disagrees with the recorded
//! constant: a node that cannot verify its chain identity must not start.

use crate::chain::{
    synthesize_fixed_seeds, DnsSeed, GenesisConfig, SeedAddress, MAIN_DNS_SEEDS,
    MAIN_FIXED_SEED_IPS, TESTNET_DNS_SEEDS,
};
use crate::constants::{GENESIS_BLOCK_VERSION, GENESIS_REWARD, SUBSIDY_HALVING_INTERVAL};
use crate::crypto::{encode_base58check, Hash};
use crate::primitives::Block;
use crate::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The coexisting networks a node can join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Main,
    Testnet,
    Regtest,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Proof-of-work hashing algorithms the network accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgo {
    Sha256d,
    Scrypt,
}

/// Number of supported hashing algorithms
pub const HASH_ALGO_COUNT: usize = 2;

impl HashAlgo {
    fn index(self) -> usize {
        match self {
            HashAlgo::Sha256d => 0,
            HashAlgo::Scrypt => 1,
        }
    }
}

/// Address kinds distinguished by base58 version prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

/// Per-network base58 version prefixes
///
/// One byte for the three plain kinds, four bytes for the extended-key
/// kinds. The single-byte prefixes must not collide within one network or
/// decoded payloads become ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPrefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
}

impl AddressPrefixes {
    /// Prefix bytes for an address kind
    pub fn prefix(&self, kind: AddressKind) -> &[u8] {
        match kind {
            AddressKind::PubkeyAddress => std::slice::from_ref(&self.pubkey_address),
            AddressKind::ScriptAddress => std::slice::from_ref(&self.script_address),
            AddressKind::SecretKey => std::slice::from_ref(&self.secret_key),
            AddressKind::ExtPublicKey => &self.ext_public_key,
            AddressKind::ExtSecretKey => &self.ext_secret_key,
        }
    }

    /// Base58check-encode a payload under the prefix for `kind`
    pub fn encode(&self, kind: AddressKind, payload: &[u8]) -> String {
        encode_base58check(self.prefix(kind), payload)
    }
}

/// Fatal configuration inconsistencies and operator-input errors
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {actual}")]
    GenesisHashMismatch {
        network: Network,
        expected: String,
        actual: String,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {actual}")]
    MerkleRootMismatch {
        network: Network,
        expected: String,
        actual: String,
    },
    #[error("-testnet and -regtest are mutually exclusive")]
    AmbiguousNetworkFlags,
}

/// Plain constant record describing one network
///
/// `ChainParams::from_spec` turns this into a verified parameter set.
/// Derived networks use struct update over their predecessor's spec instead
/// of inheritance, keeping the "start from baseline, override fields"
/// authoring convenience without dispatch.
#[derive(Debug, Clone)]
pub struct ChainSpec {
    pub network: Network,
    /// 4-byte tag prefixed to every p2p wire message
    pub message_start: [u8; 4],
    /// EC public key verifying signed network alerts (hex, opaque here)
    pub alert_key_hex: &'static str,
    pub default_port: u16,
    pub rpc_port: u16,
    /// Right-shift applied to an all-ones 256-bit value, per algorithm
    pub pow_limit_shifts: [u32; HASH_ALGO_COUNT],
    pub address_prefixes: AddressPrefixes,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seed_ips: &'static [u32],
    pub genesis: GenesisConfig,
    /// Hex of the genesis hash this network must produce
    pub expected_genesis_hash: &'static str,
    /// Hex of the genesis merkle root, where independently pinned
    pub expected_merkle_root: Option<&'static str>,
    pub subsidy_halving_interval: u64,
    pub require_rpc_password: bool,
    /// Data subdirectory; empty means the root data directory
    pub data_dir: &'static str,
}

/// Main network constant record
pub fn mainnet_spec() -> ChainSpec {
    ChainSpec {
        network: Network::Main,
        // Rarely used upper ASCII, not valid as UTF-8, and a large 4-byte
        // int at any alignment, so it is unlikely to occur in normal data.
        message_start: [0xdb, 0xee, 0x03, 0xfe],
        alert_key_hex: "04cc6cfd93d14aecef5c9cde3f2f7332a39a2821437d393afb98b6503c31ce824ca1a00fa4dd4aebe72dabea1e5a69e26c9e26a1da72bc01ad45c7f9ad7b2694b4",
        default_port: 11339,
        rpc_port: 11007,
        pow_limit_shifts: [20, 20],
        address_prefixes: AddressPrefixes {
            pubkey_address: 55,
            script_address: 9,
            secret_key: 183,
            ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
        },
        dns_seeds: MAIN_DNS_SEEDS,
        fixed_seed_ips: MAIN_FIXED_SEED_IPS,
        genesis: GenesisConfig {
            timestamp_text: "The Times 15/Jan/2016 Westminster Abbey seen in a new light+",
            reward: GENESIS_REWARD,
            payee_pubkey_hex: "04c69dcd0d789b9f7fb2414e03d223ed17c36a53549a3b9b172c9a5daa9d2025b9d57122a24fde2108a6e0771ede1564d296bdc8cc91777bb85ca4291fa9e1cb8c",
            version: GENESIS_BLOCK_VERSION,
            time: 1_452_816_000,
            bits: 0x1e0fffff,
            nonce: 2_104_718_617,
        },
        expected_genesis_hash: "e96b2f26f5c275e54107bc5ab5b12d3401fe2f41a45cbf695c5ae93ae251366b",
        // Pinned independently of the block hash so either constant
        // drifting alone is caught.
        expected_merkle_root: Some(
            "15f06c10ee0965a6b77cfcf0426201f3950389b996fcbf12db0b47c2be614d55",
        ),
        subsidy_halving_interval: SUBSIDY_HALVING_INTERVAL,
        require_rpc_password: true,
        data_dir: "",
    }
}

/// Testnet constant record: main with different magic, alert key, ports,
/// seeds, address prefixes, and a re-mined genesis nonce
pub fn testnet_spec() -> ChainSpec {
    ChainSpec {
        network: Network::Testnet,
        message_start: [0x90, 0x0d, 0x55, 0xf0],
        alert_key_hex: "04c69dcd0d789b9f7fb2414e03d223ed17c36a53549a3b9b172c9a5daa9d2025b9d57122a24fde2108a6e0771ede1564d296bdc8cc91777bb85ca4291fa9e1cb8c",
        default_port: 10888,
        rpc_port: 10889,
        address_prefixes: AddressPrefixes {
            pubkey_address: 88,
            script_address: 188,
            secret_key: 239,
            ext_public_key: [0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
        },
        dns_seeds: TESTNET_DNS_SEEDS,
        fixed_seed_ips: &[],
        // Same structure as main, different proof-of-work search
        genesis: GenesisConfig {
            nonce: 440_781_584,
            ..mainnet_spec().genesis
        },
        expected_genesis_hash: "f939a9e27b5533dfaeae97276ccd7a743812ba7b7229bd3aea6dd7f365e00718",
        expected_merkle_root: None,
        data_dir: "testnet",
        ..mainnet_spec()
    }
}

/// Regtest constant record: testnet with throwaway difficulty, a short
/// halving interval, and no bootstrap infrastructure at all
pub fn regtest_spec() -> ChainSpec {
    ChainSpec {
        network: Network::Regtest,
        message_start: [0xfa, 0x0f, 0xa5, 0x5a],
        default_port: 19000,
        subsidy_halving_interval: 150,
        // Least restrictive bound so tests can mine blocks instantly
        pow_limit_shifts: [1, 1],
        genesis: GenesisConfig {
            bits: 0x207fffff,
            nonce: 5,
            ..testnet_spec().genesis
        },
        expected_genesis_hash: "74914ab94100c4ff957e89ea2ba0abec0e7f5f9f226a51876da5e728e870a247",
        // Extended-key prefixes stay inherited from testnet
        address_prefixes: AddressPrefixes {
            pubkey_address: 0,
            script_address: 5,
            secret_key: 128,
            ..testnet_spec().address_prefixes
        },
        // Regtest mode doesn't have any DNS seeds
        dns_seeds: &[],
        // Assumed to run in trusted, non-networked local environments
        require_rpc_password: false,
        data_dir: "regtest",
        ..testnet_spec()
    }
}

/// A fully constructed, hash-verified parameter set for one network
///
/// Immutable after construction; safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct ChainParams {
    network: Network,
    message_start: [u8; 4],
    alert_key: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limits: [U256; HASH_ALGO_COUNT],
    address_prefixes: AddressPrefixes,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<SeedAddress>,
    genesis: Block,
    genesis_hash: Hash,
    subsidy_halving_interval: u64,
    require_rpc_password: bool,
    data_dir: &'static str,
}

impl ChainParams {
    /// Build and verify a parameter set from its constant record.
    ///
    /// The computed genesis hash (and merkle root, where the spec pins one)
    /// must equal the hard-coded constant; a mismatch means some byte of the
    /// upstream construction drifted and the node must not run.
    pub fn from_spec(spec: ChainSpec) -> Result<Self, ParamsError> {
        let genesis = spec.genesis.build();
        let genesis_hash = genesis.hash();

        if genesis_hash.to_hex() != spec.expected_genesis_hash {
            return Err(ParamsError::GenesisHashMismatch {
                network: spec.network,
                expected: spec.expected_genesis_hash.to_string(),
                actual: genesis_hash.to_hex(),
            });
        }

        if let Some(expected) = spec.expected_merkle_root {
            let merkle_root = genesis.header.merkle_root;
            if merkle_root.to_hex() != expected {
                return Err(ParamsError::MerkleRootMismatch {
                    network: spec.network,
                    expected: expected.to_string(),
                    actual: merkle_root.to_hex(),
                });
            }
        }

        let pow_limits = spec.pow_limit_shifts.map(|shift| U256::MAX >> shift);
        let fixed_seeds = synthesize_fixed_seeds(spec.fixed_seed_ips, spec.default_port);

        Ok(Self {
            network: spec.network,
            message_start: spec.message_start,
            alert_key: hex::decode(spec.alert_key_hex).unwrap_or_default(),
            default_port: spec.default_port,
            rpc_port: spec.rpc_port,
            pow_limits,
            address_prefixes: spec.address_prefixes,
            dns_seeds: spec.dns_seeds.to_vec(),
            fixed_seeds,
            genesis,
            genesis_hash,
            subsidy_halving_interval: spec.subsidy_halving_interval,
            require_rpc_password: spec.require_rpc_password,
            data_dir: spec.data_dir,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// 4-byte wire message tag for this network
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// Public key verifying signed network alerts
    pub fn alert_key(&self) -> &[u8] {
        &self.alert_key
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Maximum-allowed proof-of-work target (minimum difficulty) for `algo`
    pub fn pow_limit(&self, algo: HashAlgo) -> U256 {
        self.pow_limits[algo.index()]
    }

    pub fn address_prefixes(&self) -> &AddressPrefixes {
        &self.address_prefixes
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    pub fn subsidy_halving_interval(&self) -> u64 {
        self.subsidy_halving_interval
    }

    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    /// Data subdirectory name; empty for the main network
    pub fn data_dir(&self) -> &'static str {
        self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_params_verify() {
        let params = ChainParams::from_spec(mainnet_spec()).unwrap();
        assert_eq!(params.network(), Network::Main);
        assert_eq!(params.default_port(), 11339);
        assert_eq!(params.rpc_port(), 11007);
        assert_eq!(params.dns_seeds().len(), 8);
        assert_eq!(params.fixed_seeds().len(), 1);
        assert!(params.require_rpc_password());
        assert_eq!(params.data_dir(), "");
    }

    #[test]
    fn test_testnet_params_verify() {
        let params = ChainParams::from_spec(testnet_spec()).unwrap();
        assert_eq!(params.network(), Network::Testnet);
        assert_eq!(params.default_port(), 10888);
        assert_eq!(params.rpc_port(), 10889);
        assert_eq!(params.dns_seeds().len(), 1);
        assert!(params.fixed_seeds().is_empty());
        assert_eq!(params.data_dir(), "testnet");
    }

    #[test]
    fn test_regtest_params_verify() {
        let params = ChainParams::from_spec(regtest_spec()).unwrap();
        assert_eq!(params.network(), Network::Regtest);
        assert_eq!(params.default_port(), 19000);
        // Inherited from testnet, never overridden
        assert_eq!(params.rpc_port(), 10889);
        assert!(params.dns_seeds().is_empty());
        assert!(params.fixed_seeds().is_empty());
        assert!(!params.require_rpc_password());
        assert_eq!(params.subsidy_halving_interval(), 150);
    }

    #[test]
    fn test_genesis_hashes_match_documented_constants() {
        for spec in [mainnet_spec(), testnet_spec(), regtest_spec()] {
            let expected = spec.expected_genesis_hash;
            let params = ChainParams::from_spec(spec).unwrap();
            assert_eq!(params.genesis_hash().to_hex(), expected);
        }
    }

    #[test]
    fn test_corrupted_expected_hash_is_rejected() {
        let mut spec = mainnet_spec();
        spec.expected_genesis_hash =
            "0000000000000000000000000000000000000000000000000000000000000000";
        match ChainParams::from_spec(spec) {
            Err(ParamsError::GenesisHashMismatch { network, .. }) => {
                assert_eq!(network, Network::Main);
            }
            other => panic!("expected genesis hash mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupted_merkle_constant_is_rejected() {
        let mut spec = mainnet_spec();
        spec.expected_merkle_root =
            Some("0000000000000000000000000000000000000000000000000000000000000000");
        assert!(matches!(
            ChainParams::from_spec(spec),
            Err(ParamsError::MerkleRootMismatch { .. })
        ));
    }

    #[test]
    fn test_changed_nonce_is_rejected() {
        let mut spec = testnet_spec();
        spec.genesis.nonce += 1;
        assert!(matches!(
            ChainParams::from_spec(spec),
            Err(ParamsError::GenesisHashMismatch { .. })
        ));
    }

    #[test]
    fn test_pow_limits() {
        let main = ChainParams::from_spec(mainnet_spec()).unwrap();
        let regtest = ChainParams::from_spec(regtest_spec()).unwrap();
        assert_eq!(main.pow_limit(HashAlgo::Sha256d), U256::MAX >> 20);
        assert_eq!(main.pow_limit(HashAlgo::Scrypt), U256::MAX >> 20);
        assert_eq!(regtest.pow_limit(HashAlgo::Sha256d), U256::MAX >> 1);
        assert!(regtest.pow_limit(HashAlgo::Scrypt) > main.pow_limit(HashAlgo::Scrypt));
    }

    #[test]
    fn test_message_starts_are_distinct() {
        let specs = [mainnet_spec(), testnet_spec(), regtest_spec()];
        for (i, a) in specs.iter().enumerate() {
            for b in &specs[i + 1..] {
                assert_ne!(a.message_start, b.message_start);
            }
        }
    }

    #[test]
    fn test_single_byte_prefixes_distinct_within_network() {
        for spec in [mainnet_spec(), testnet_spec(), regtest_spec()] {
            let p = spec.address_prefixes;
            assert_ne!(p.pubkey_address, p.script_address, "{}", spec.network);
            assert_ne!(p.pubkey_address, p.secret_key, "{}", spec.network);
            assert_ne!(p.script_address, p.secret_key, "{}", spec.network);
        }
    }

    #[test]
    fn test_regtest_inherits_testnet_extended_prefixes() {
        let testnet = testnet_spec().address_prefixes;
        let regtest = regtest_spec().address_prefixes;
        assert_eq!(regtest.ext_public_key, testnet.ext_public_key);
        assert_eq!(regtest.ext_secret_key, testnet.ext_secret_key);
    }

    #[test]
    fn test_prefix_accessor_lengths() {
        let p = mainnet_spec().address_prefixes;
        assert_eq!(p.prefix(AddressKind::PubkeyAddress), &[55]);
        assert_eq!(p.prefix(AddressKind::ScriptAddress), &[9]);
        assert_eq!(p.prefix(AddressKind::SecretKey), &[183]);
        assert_eq!(p.prefix(AddressKind::ExtPublicKey).len(), 4);
        assert_eq!(p.prefix(AddressKind::ExtSecretKey).len(), 4);
    }

    #[test]
    fn test_prefix_encoding_distinguishes_networks() {
        let payload = [0x5au8; 20];
        let main = mainnet_spec().address_prefixes;
        let testnet = testnet_spec().address_prefixes;
        assert_ne!(
            main.encode(AddressKind::PubkeyAddress, &payload),
            testnet.encode(AddressKind::PubkeyAddress, &payload)
        );
    }

    #[test]
    fn test_alert_key_decodes() {
        let params = ChainParams::from_spec(mainnet_spec()).unwrap();
        // Uncompressed EC point encoding: 0x04 plus two 32-byte coordinates
        assert_eq!(params.alert_key().len(), 65);
        assert_eq!(params.alert_key()[0], 0x04);
    }
}
