//! Supported bridge network pairings.
//!
//! A network identifier selects one supported pairing/environment
//! (e.g. BTC↔ETH mainnet). The catalog holds one immutable profile per
//! identifier; the endpoint tables hold the local/global indexer and RPC
//! addresses per identifier.

pub mod catalog;
pub mod endpoints;

pub use catalog::{NetworkCatalog, NetworkProfile};
pub use endpoints::{EndpointSet, Topology};

/// BTC↔ETH mainnet pairing.
pub const NETWORK_BTC_ETH: &str = "btc_eth";

/// BTC↔BSC mainnet pairing.
pub const NETWORK_BTC_BSC: &str = "btc_bsc";

/// Normalize operator input to a canonical network identifier.
///
/// Operators may answer with the menu number or the identifier itself.
/// Returns `None` for anything that is not a supported selection.
pub fn canonical_id(input: &str) -> Option<&'static str> {
    match input.trim() {
        "1" | NETWORK_BTC_ETH => Some(NETWORK_BTC_ETH),
        "2" | NETWORK_BTC_BSC => Some(NETWORK_BTC_BSC),
        _ => None,
    }
}
