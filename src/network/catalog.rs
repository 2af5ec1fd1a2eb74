//! Network profile catalog.
//!
//! One immutable constant bundle per supported network: bootstrap peers,
//! contract addresses, protocol limits, and the coin pair. The catalog is
//! built once at process start and passed by reference into the resolver
//! and the wizard; profiles are never mutated after construction.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::network::{NETWORK_BTC_BSC, NETWORK_BTC_ETH};

/// Immutable per-network constant bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Canonical network identifier.
    pub id: String,

    /// Whether this pairing targets test networks.
    pub testnet: bool,

    /// Bootstrap peer addresses (host:port), in dial order.
    pub bootstrap_peers: Vec<String>,

    /// Multisig wallet contract address.
    pub wallet_contract: String,

    /// Liquidity-pool token contract address.
    pub lp_token_contract: String,

    /// Wrapped-asset token contract address.
    pub wrapped_token_contract: String,

    /// Platform status URL polled for the emergency stop trigger.
    pub stop_trigger_uri: String,

    /// Epoch length in blocks.
    pub epoch_blocks: u32,

    /// TSS signing threshold.
    pub threshold: u32,

    /// Maximum number of key shares.
    pub max_shares: u32,

    /// Maximum number of nodes.
    pub max_nodes: u32,

    /// Number of peers participating in keygen.
    pub keygen_peers: u32,

    /// Minimum free capacity required on the data mount path (MiB).
    pub min_mount_path_mib: u64,

    /// Expected size of the blockchain snapshot (bytes).
    pub snapshot_bytes: u64,

    /// Wrapped-asset symbol (differs per network).
    pub coin_wrapped: String,

    /// Anchor-asset symbol (constant across pairings).
    pub coin_anchor: String,
}

impl NetworkProfile {
    /// BTC↔ETH mainnet constants.
    pub fn btc_eth() -> Self {
        Self {
            id: NETWORK_BTC_ETH.to_string(),
            testnet: false,
            bootstrap_peers: vec![
                "49.12.68.127:12131".to_string(),
                "49.12.7.120:12132".to_string(),
                "116.203.56.22:12133".to_string(),
            ],
            wallet_contract: "0xbe83f11d3900F3a13d8D12fB62F5e85646cDA45e".to_string(),
            lp_token_contract: "0x22883a3db06737ece21f479a8009b8b9f22b6cc9".to_string(),
            wrapped_token_contract: "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599".to_string(),
            stop_trigger_uri:
                "https://btc-wbtc-mainnet.s3.eu-central-1.amazonaws.com/platform_status.json"
                    .to_string(),
            epoch_blocks: 3,
            threshold: 31,
            max_shares: 50,
            max_nodes: 60,
            keygen_peers: 32,
            min_mount_path_mib: 1_430_511,
            snapshot_bytes: 1_175_750_002_860,
            coin_wrapped: "WBTC".to_string(),
            coin_anchor: "BTC".to_string(),
        }
    }

    /// BTC↔BSC mainnet constants.
    pub fn btc_bsc() -> Self {
        Self {
            id: NETWORK_BTC_BSC.to_string(),
            testnet: false,
            bootstrap_peers: vec![
                "163.172.141.211:12124".to_string(),
                "51.158.68.138:12125".to_string(),
                "51.159.134.173:12126".to_string(),
            ],
            wallet_contract: "0xaD22900062e4cd766102A1f33E530F5303fe1aDF".to_string(),
            lp_token_contract: "0xdBa68BeF9b541999Fd9650FF72C19d5E1ceeCd10".to_string(),
            wrapped_token_contract: "0x7130d2a12b9bcbfae4f2634d864a1ee1ce3ead9c".to_string(),
            stop_trigger_uri:
                "https://btc-bsc-mainnet.s3-ap-southeast-1.amazonaws.com/platform_status.json"
                    .to_string(),
            epoch_blocks: 15,
            threshold: 31,
            max_shares: 50,
            max_nodes: 60,
            keygen_peers: 35,
            min_mount_path_mib: 965_978,
            snapshot_bytes: 971_003_535_776,
            coin_wrapped: "BTCB".to_string(),
            coin_anchor: "BTC".to_string(),
        }
    }
}

/// Read-only registry of network profiles.
///
/// Safe for concurrent lookup from any number of callers; lookups have no
/// side effects.
#[derive(Debug, Clone)]
pub struct NetworkCatalog {
    profiles: Vec<NetworkProfile>,
}

impl NetworkCatalog {
    /// Build the registry with every supported network.
    pub fn new() -> Self {
        Self {
            profiles: vec![NetworkProfile::btc_eth(), NetworkProfile::btc_bsc()],
        }
    }

    /// Look up the profile for a network identifier.
    pub fn profile(&self, id: &str) -> Result<&NetworkProfile, SetupError> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SetupError::NotFound(format!("network \"{}\"", id)))
    }

    /// Canonical identifiers of every supported network, in menu order.
    pub fn ids(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.id.as_str()).collect()
    }

    /// Whether the identifier names a supported network.
    pub fn contains(&self, id: &str) -> bool {
        self.profiles.iter().any(|p| p.id == id)
    }
}

impl Default for NetworkCatalog {
    fn default() -> Self {
        Self::new()
    }
}
