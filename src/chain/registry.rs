//! Parameter registry and network selection
//!
//! Owns the three verified parameter sets plus the active-network choice.
//! The registry is explicit state handed to consumers at startup rather
//! than a process-wide pointer; the active network is written once during
//! startup and only read afterwards.

use crate::chain::{
    mainnet_spec, regtest_spec, testnet_spec, ChainParams, Network, ParamsError,
};

/// All three parameter sets and the currently active network
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    main: ChainParams,
    testnet: ChainParams,
    regtest: ChainParams,
    active: Network,
}

impl ChainRegistry {
    /// Construct and verify every parameter set, main first.
    ///
    /// Each network's genesis assertion must pass before the next derived
    /// network is built. The active network defaults to main.
    pub fn bootstrap() -> Result<Self, ParamsError> {
        let main = ChainParams::from_spec(mainnet_spec())?;
        let testnet = ChainParams::from_spec(testnet_spec())?;
        let regtest = ChainParams::from_spec(regtest_spec())?;
        Ok(Self {
            main,
            testnet,
            regtest,
            active: Network::Main,
        })
    }

    /// Parameter set for a specific network
    pub fn params(&self, network: Network) -> &ChainParams {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
        }
    }

    /// Parameter set of the active network
    pub fn current(&self) -> &ChainParams {
        self.params(self.active)
    }

    pub fn active_network(&self) -> Network {
        self.active
    }

    /// Make `network` the active one
    pub fn select(&mut self, network: Network) {
        self.active = network;
    }

    /// Resolve the command-line flags and apply the result.
    ///
    /// On ambiguous flags the active network is left unchanged.
    pub fn select_from_flags(&mut self, flags: &NetworkFlags) -> Result<Network, ParamsError> {
        let network = flags.resolve()?;
        self.select(network);
        Ok(network)
    }
}

/// The two mutually exclusive network selection flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkFlags {
    pub testnet: bool,
    pub regtest: bool,
}

impl NetworkFlags {
    /// Scan an argument list for `-testnet` / `-regtest` (either dash style)
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Self::default();
        for arg in args {
            match arg.as_ref() {
                "-testnet" | "--testnet" => flags.testnet = true,
                "-regtest" | "--regtest" => flags.regtest = true,
                _ => {}
            }
        }
        flags
    }

    /// Resolve to a network: regtest wins over testnet, neither means main.
    /// Both set at once is ambiguous operator intent and an error.
    pub fn resolve(&self) -> Result<Network, ParamsError> {
        match (self.testnet, self.regtest) {
            (true, true) => Err(ParamsError::AmbiguousNetworkFlags),
            (_, true) => Ok(Network::Regtest),
            (true, _) => Ok(Network::Testnet),
            _ => Ok(Network::Main),
        }
    }
}
