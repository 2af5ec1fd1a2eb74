//! Per-network RPC and indexer endpoint tables.
//!
//! Endpoints come in two disjoint topologies: `Local` points at the
//! private-network indexer stack deployed next to the node, `Global` at the
//! public foundation-operated hosts. Which topology applies is always an
//! explicit parameter of resolution, never implied by step ordering.

use serde::{Deserialize, Serialize};

use crate::network::{NETWORK_BTC_BSC, NETWORK_BTC_ETH};

// Private-network indexer stack (shared 10.2.0.1 block).
const LOCAL_GETH_RPC: &str = "http://10.2.0.1:8545";
const LOCAL_BSC_RPC: &str = "http://10.2.0.1:8575";
const LOCAL_BLOCKBOOK_BTC: &str = "http://10.2.0.1:9130";
const LOCAL_BLOCKBOOK_BTC_WS: &str = "ws://10.2.0.1:9130/websocket";
const LOCAL_BLOCKBOOK_ETH: &str = "http://10.2.0.1:9131";
const LOCAL_BLOCKBOOK_ETH_WS: &str = "ws://10.2.0.1:9131/websocket";
const LOCAL_BLOCKBOOK_BSC: &str = "http://10.2.0.1:9132";
const LOCAL_BLOCKBOOK_BSC_WS: &str = "ws://10.2.0.1:9132/websocket";

/// Whether indexer/RPC endpoints point at the private deployment or the
/// public hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    /// Loopback/private-network indexer stack.
    Local,
    /// Public-hostname foundation infrastructure.
    Global,
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Local => write!(f, "local"),
            Topology::Global => write!(f, "global"),
        }
    }
}

/// The five endpoint values a topology supplies for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
    /// Second-chain RPC endpoint (Geth or BSC node).
    pub rpc_uri: String,
    /// BTC indexer REST endpoint.
    pub btc_indexer_uri: String,
    /// BTC indexer streaming endpoint.
    pub btc_indexer_ws_uri: String,
    /// Second-chain indexer REST endpoint.
    pub eth_indexer_uri: String,
    /// Second-chain indexer streaming endpoint.
    pub eth_indexer_ws_uri: String,
}

/// Endpoint table lookup for a network+topology combination.
///
/// Returns `None` when no table exists for the combination; callers report
/// that as a configuration gap rather than a hard failure.
pub fn endpoints(network: &str, topology: Topology) -> Option<EndpointSet> {
    match (network, topology) {
        (NETWORK_BTC_ETH, Topology::Local) => Some(EndpointSet {
            rpc_uri: LOCAL_GETH_RPC.to_string(),
            btc_indexer_uri: LOCAL_BLOCKBOOK_BTC.to_string(),
            btc_indexer_ws_uri: LOCAL_BLOCKBOOK_BTC_WS.to_string(),
            eth_indexer_uri: LOCAL_BLOCKBOOK_ETH.to_string(),
            eth_indexer_ws_uri: LOCAL_BLOCKBOOK_ETH_WS.to_string(),
        }),
        (NETWORK_BTC_BSC, Topology::Local) => Some(EndpointSet {
            rpc_uri: LOCAL_BSC_RPC.to_string(),
            btc_indexer_uri: LOCAL_BLOCKBOOK_BTC.to_string(),
            btc_indexer_ws_uri: LOCAL_BLOCKBOOK_BTC_WS.to_string(),
            eth_indexer_uri: LOCAL_BLOCKBOOK_BSC.to_string(),
            eth_indexer_ws_uri: LOCAL_BLOCKBOOK_BSC_WS.to_string(),
        }),
        (NETWORK_BTC_ETH, Topology::Global) => Some(EndpointSet {
            // foundation geth_1
            rpc_uri: "http://51.159.56.104:8545".to_string(),
            btc_indexer_uri: "http://btc-eth-indexer.swingby.network:9130".to_string(),
            btc_indexer_ws_uri: "wss://btc-eth-indexer.swingby.network/btc-websocket".to_string(),
            eth_indexer_uri: "http://btc-eth-indexer.swingby.network:9131".to_string(),
            eth_indexer_ws_uri: "wss://btc-eth-indexer.swingby.network/eth-websocket".to_string(),
        }),
        (NETWORK_BTC_BSC, Topology::Global) => Some(EndpointSet {
            // foundation bsc_2
            rpc_uri: "http://btc-bsc-indexer.swingby.network:8575".to_string(),
            btc_indexer_uri: "https://btc-eth-indexer-2.swingby.network/bb-btc".to_string(),
            btc_indexer_ws_uri: "wss://btc-eth-indexer-2.swingby.network/btc-websocket".to_string(),
            eth_indexer_uri: "https://btc-bsc-indexer.swingby.network/bb-bsc".to_string(),
            eth_indexer_ws_uri: "wss://btc-bsc-indexer.swingby.network/bsc-websocket".to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_tables_exist_for_both_networks() {
        for network in [NETWORK_BTC_ETH, NETWORK_BTC_BSC] {
            let set = endpoints(network, Topology::Local).unwrap();
            assert!(set.rpc_uri.contains("10.2.0.1"));
            assert!(set.btc_indexer_ws_uri.starts_with("ws://"));
        }
    }

    #[test]
    fn test_global_tables_are_public_hosts() {
        let eth = endpoints(NETWORK_BTC_ETH, Topology::Global).unwrap();
        assert!(eth.btc_indexer_uri.contains("swingby.network"));
        assert!(eth.btc_indexer_ws_uri.starts_with("wss://"));

        let bsc = endpoints(NETWORK_BTC_BSC, Topology::Global).unwrap();
        assert!(bsc.eth_indexer_uri.contains("bb-bsc"));
    }

    #[test]
    fn test_local_and_global_tables_are_disjoint() {
        for network in [NETWORK_BTC_ETH, NETWORK_BTC_BSC] {
            let local = endpoints(network, Topology::Local).unwrap();
            let global = endpoints(network, Topology::Global).unwrap();
            assert_ne!(local.rpc_uri, global.rpc_uri);
            assert_ne!(local.btc_indexer_uri, global.btc_indexer_uri);
            assert_ne!(local.eth_indexer_uri, global.eth_indexer_uri);
        }
    }

    #[test]
    fn test_unknown_network_has_no_table() {
        assert!(endpoints("tbtc_goerli", Topology::Local).is_none());
        assert!(endpoints("tbtc_goerli", Topology::Global).is_none());
    }
}
