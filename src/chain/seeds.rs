//! Seed node configuration
//!
//! DNS bootstrap hostnames and pre-resolved fixed seeds per network.
//! New nodes query the DNS seeds first; the fixed seeds are a fallback
//! shipped with the software for when DNS seeding is unavailable.

use rand::Rng;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::{SystemTime, UNIX_EPOCH};

/// One DNS bootstrap entry: display name and hostname to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// A pre-resolved peer address with a synthetic last-seen timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// Seconds since Unix epoch
    pub last_seen: u64,
}

const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// Main network DNS seeds
pub const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed { name: "s1.peonycredit.org", host: "s1.peonycredit.org" },
    DnsSeed { name: "s2.peonycredit.org", host: "s2.peonycredit.org" },
    DnsSeed { name: "s3.peonycredit.org", host: "s3.peonycredit.org" },
    DnsSeed { name: "s4.peonycredit.org", host: "s4.peonycredit.org" },
    DnsSeed { name: "s5.peonycredit.org", host: "s5.peonycredit.org" },
    DnsSeed { name: "s6.peonycredit.org", host: "s6.peonycredit.org" },
    DnsSeed { name: "s7.peonycredit.org", host: "s7.peonycredit.org" },
    DnsSeed { name: "s8.peonycredit.org", host: "s8.peonycredit.org" },
];

/// Testnet DNS seeds
pub const TESTNET_DNS_SEEDS: &[DnsSeed] = &[DnsSeed {
    name: "testseed1.peonycredit.org",
    host: "testseed1.peonycredit.org",
}];

/// Packed little-endian IPv4 fixed seeds for the main network
pub const MAIN_FIXED_SEED_IPS: &[u32] = &[0x12345678];

/// Expand packed IPs into seed addresses on the given port.
///
/// Seed nodes get a random last-seen time of between one and two weeks ago,
/// so fresher addresses learned from gossip win once a connection is made.
pub fn synthesize_fixed_seeds(ips: &[u32], port: u16) -> Vec<SeedAddress> {
    let mut rng = rand::thread_rng();
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    ips.iter()
        .map(|&packed| {
            let ip = Ipv4Addr::from(packed.to_le_bytes());
            let age = rng.gen_range(0..ONE_WEEK_SECS) + ONE_WEEK_SECS;
            SeedAddress {
                addr: SocketAddr::V4(SocketAddrV4::new(ip, port)),
                last_seen: now.saturating_sub(age),
            }
        })
        .collect()
}
