//! The mutable node configuration record.
//!
//! One record per operator/network: operator-supplied fields (moniker,
//! reward/stake addresses, domain) plus network-resolved fields copied from
//! the owning profile. Switching network re-resolves every network-dependent
//! field; stale values from a previous network never survive a switch.

pub mod resolver;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::network::endpoints::EndpointSet;
use crate::network::{endpoints, NetworkProfile, Topology, NETWORK_BTC_ETH};

/// Default moniker before the operator picks one.
pub const DEFAULT_MONIKER: &str = "Default Node";

/// BNB chain seed node.
pub const BNB_SEED_MAIN: &str = "tcp://dataseed2.defibit.io:80";

/// Initial keygen deadline; operators override it per ceremony.
pub const DEFAULT_KEYGEN_UNTIL: &str = "2014-12-31T12:13:24Z";

/// One operator's in-progress or completed node configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    // Identity / topology
    pub network: String,
    pub moniker: String,
    pub domain: Option<String>,
    /// Always derived from `domain`; never set independently.
    pub preferred_uri: Option<String>,
    pub bootstrap_peers: Vec<String>,

    // Assets
    pub coin_a: String,
    pub coin_b: String,
    pub reward_address_eth: Option<String>,
    pub reward_address_bnb: Option<String>,
    pub stake_address: Option<String>,
    pub stake_memo: Option<String>,

    // Endpoints (unset only when a topology table was missing at resolve)
    pub rpc_uri: Option<String>,
    pub btc_indexer_uri: Option<String>,
    pub btc_indexer_ws_uri: Option<String>,
    pub eth_indexer_uri: Option<String>,
    pub eth_indexer_ws_uri: Option<String>,
    pub bnb_rpc_uri: String,

    // Network-resolved contracts and triggers
    pub wallet_contract: String,
    pub lp_token_contract: String,
    pub wrapped_token_contract: String,
    pub stop_trigger_uri: String,

    // Protocol parameters
    pub testnet: bool,
    pub threshold: u32,
    pub epoch_blocks: u32,
    pub max_shares: u32,
    pub max_nodes: u32,
    pub keygen_peers: u32,
    /// RFC 3339 keygen deadline, operator/record-supplied.
    pub keygen_until: String,
}

impl NodeConfig {
    /// Record with BTC↔ETH mainnet defaults and the local endpoint topology,
    /// as handed to an operator at first contact.
    pub fn new() -> Self {
        let profile = NetworkProfile::btc_eth();
        let mut cfg = Self {
            network: String::new(),
            moniker: DEFAULT_MONIKER.to_string(),
            domain: None,
            preferred_uri: None,
            bootstrap_peers: Vec::new(),
            coin_a: String::new(),
            coin_b: String::new(),
            reward_address_eth: None,
            reward_address_bnb: None,
            stake_address: None,
            stake_memo: None,
            rpc_uri: None,
            btc_indexer_uri: None,
            btc_indexer_ws_uri: None,
            eth_indexer_uri: None,
            eth_indexer_ws_uri: None,
            bnb_rpc_uri: BNB_SEED_MAIN.to_string(),
            wallet_contract: String::new(),
            lp_token_contract: String::new(),
            wrapped_token_contract: String::new(),
            stop_trigger_uri: String::new(),
            testnet: false,
            threshold: 0,
            epoch_blocks: 0,
            max_shares: 0,
            max_nodes: 0,
            keygen_peers: 0,
            keygen_until: DEFAULT_KEYGEN_UNTIL.to_string(),
        };
        cfg.apply_profile(&profile);
        cfg.apply_endpoints(endpoints::endpoints(NETWORK_BTC_ETH, Topology::Local));
        cfg
    }

    /// Overwrite every network-dependent field from a profile.
    ///
    /// Endpoints are handled separately because they also depend on the
    /// requested topology.
    pub fn apply_profile(&mut self, profile: &NetworkProfile) {
        self.network = profile.id.clone();
        self.testnet = profile.testnet;
        self.bootstrap_peers = profile.bootstrap_peers.clone();
        self.wallet_contract = profile.wallet_contract.clone();
        self.lp_token_contract = profile.lp_token_contract.clone();
        self.wrapped_token_contract = profile.wrapped_token_contract.clone();
        self.stop_trigger_uri = profile.stop_trigger_uri.clone();
        self.epoch_blocks = profile.epoch_blocks;
        self.threshold = profile.threshold;
        self.max_shares = profile.max_shares;
        self.max_nodes = profile.max_nodes;
        self.keygen_peers = profile.keygen_peers;
        self.coin_a = profile.coin_wrapped.clone();
        self.coin_b = profile.coin_anchor.clone();
    }

    /// Set all five endpoint fields from one topology table, or clear them
    /// when no table exists for the combination.
    pub fn apply_endpoints(&mut self, set: Option<EndpointSet>) {
        match set {
            Some(set) => {
                self.rpc_uri = Some(set.rpc_uri);
                self.btc_indexer_uri = Some(set.btc_indexer_uri);
                self.btc_indexer_ws_uri = Some(set.btc_indexer_ws_uri);
                self.eth_indexer_uri = Some(set.eth_indexer_uri);
                self.eth_indexer_ws_uri = Some(set.eth_indexer_ws_uri);
            }
            None => {
                self.rpc_uri = None;
                self.btc_indexer_uri = None;
                self.btc_indexer_ws_uri = None;
                self.eth_indexer_uri = None;
                self.eth_indexer_ws_uri = None;
            }
        }
    }

    /// Set the server subdomain and re-derive the preferred URI.
    pub fn set_domain(&mut self, domain: &str) -> Result<(), SetupError> {
        let domain = domain.trim();
        if domain.is_empty() || !domain.contains('.') || domain.contains(char::is_whitespace) {
            return Err(SetupError::InvalidInput(format!(
                "\"{}\" is not a subdomain like testnode-1.example.com",
                domain
            )));
        }
        self.domain = Some(domain.to_string());
        self.preferred_uri = Some(format!("https://{}", domain));
        Ok(())
    }

    /// Set the keygen deadline; must be an RFC 3339 timestamp.
    pub fn set_keygen_deadline(&mut self, deadline: &str) -> Result<(), SetupError> {
        let deadline = deadline.trim();
        DateTime::parse_from_rfc3339(deadline).map_err(|e| {
            SetupError::InvalidInput(format!("\"{}\" is not an RFC 3339 timestamp: {}", deadline, e))
        })?;
        self.keygen_until = deadline.to_string();
        Ok(())
    }

    /// Check the protocol parameters against the owning profile's limits.
    pub fn bounds_check(&self, profile: &NetworkProfile) -> Result<(), SetupError> {
        let checks = [
            ("threshold", self.threshold, profile.threshold),
            ("max_shares", self.max_shares, profile.max_shares),
            ("max_nodes", self.max_nodes, profile.max_nodes),
            ("keygen_peers", self.keygen_peers, profile.keygen_peers),
        ];
        for (name, value, bound) in checks {
            if value > bound {
                return Err(SetupError::InvalidInput(format!(
                    "{} = {} exceeds the {} limit of {}",
                    name, value, profile.id, bound
                )));
            }
        }
        Ok(())
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::new()
    }
}
