//! Peony Credit (PNY) Node
//!
//! Startup entry point: build and verify the per-network parameter sets,
//! select the network from the command line, and print the resulting chain
//! identity. Any verification failure is fatal before other subsystems run.

use peony_core::chain::{ChainRegistry, HashAlgo, NetworkFlags};
use peony_core::constants::COIN;
use std::process;

fn main() {
    let flags = NetworkFlags::from_args(std::env::args().skip(1));

    let mut registry = match ChainRegistry::bootstrap() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("chain parameter verification failed: {e}");
            process::exit(1);
        }
    };

    let network = match registry.select_from_flags(&flags) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let params = registry.current();
    let genesis = params.genesis_block();

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║                PEONY CREDIT (PNY) NODE                   ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();
    println!("Network:        {network}");
    println!("Message start:  {}", hex::encode(params.message_start()));
    println!("P2P port:       {}", params.default_port());
    println!(
        "RPC port:       {} (password {})",
        params.rpc_port(),
        if params.require_rpc_password() {
            "required"
        } else {
            "not required"
        }
    );
    println!(
        "Data dir:       {}",
        if params.data_dir().is_empty() {
            "<root>"
        } else {
            params.data_dir()
        }
    );
    println!(
        "Halving:        every {} blocks",
        params.subsidy_halving_interval()
    );
    println!("DNS seeds:      {}", params.dns_seeds().len());
    println!("Fixed seeds:    {}", params.fixed_seeds().len());
    println!(
        "PoW limit:      {:064x} (sha256d)",
        params.pow_limit(HashAlgo::Sha256d)
    );
    println!();
    println!("Genesis Block:");
    println!("  Hash:         {}", params.genesis_hash());
    println!("  Merkle Root:  {}", genesis.header.merkle_root);
    println!("  Timestamp:    {}", genesis.header.timestamp);
    println!("  Bits:         0x{:08x}", genesis.header.bits);
    println!("  Nonce:        {}", genesis.header.nonce);
    println!(
        "  Subsidy:      {} PNY",
        genesis.transactions[0].outputs[0].value / COIN
    );
}
