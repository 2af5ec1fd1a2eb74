//! Artifact rendering.
//!
//! The deployable artifact is a TOML document produced by substituting named
//! slots into a fixed template. Every placeholder has exactly one [`Slot`]
//! variant mapping it to a record accessor, so a missing mapping is caught by
//! the slot-coverage tests instead of surfacing as an unexpanded placeholder
//! in a deployed config. Rendering is pure: equal records render to
//! byte-identical output.

use crate::config::NodeConfig;
use crate::error::SetupError;

/// Fixed artifact template. Placeholders are `**name**` tokens; each one is
/// owned by exactly one [`Slot`].
const TEMPLATE: &str = r#"[p2p]
moniker = "**node_moniker_placeholder**"
listen = "0.0.0.0"
port = 12121

[general]
epoch_blocks = **epoch_block**

[rest]
listen = "0.0.0.0"
port = 8067
tls_enabled = false
preferred_uri = "**node_preferred_uri**"

[logger]
level = "INFO"
max_file_size_MB = 10
max_backup_files = 100
max_retain_files_days = 14
use_console_logger = true
use_file_logger = true
compress = true

[swaps]
testnet = **is_testnet**
coin_1 = "**coin_A**"
coin_2 = "**coin_B**"
fee_percent = 0.2
stop_trigger_uri = "**stop_trigger_uri**"

[tss]
threshold = **threshold_placeholder**
max_shares = **max_shares**
max_nodes = **max_nodes**
keygen_peers = **keygen_peers**
keygen_until = "**keygen_until**"

[btc]
rest_uri = "**btc_blockbook_endpoint**"
ws_uri = "**btc_blockbook_ws_endpoint**"
miner_fee = 0.0002

[eth]
rpc_uri = "**eth_rpc_endpoint**"
rest_uri = "**eth_blockbook_endpoint**"
ws_uri = "**eth_blockbook_ws_endpoint**"
wallet_contract_addr = "**eth_wallet_contract**"
lp_token_contract_addr = "**eth_lpt_contract**"
btc_token_contract_addr = "**btc_token_contract_addr**"

[bsc_fees]
miner_fee = 0.000015

[bnb]
rpc_uri = "**rpc_uri_placeholder**"
http_uri = "https://explorer.binance.org"
stake_addr = "**stake_addr**"
"#;

/// Enumerable list of template slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Moniker,
    EpochBlocks,
    PreferredUri,
    IsTestnet,
    CoinA,
    CoinB,
    StopTriggerUri,
    Threshold,
    MaxShares,
    MaxNodes,
    KeygenPeers,
    KeygenUntil,
    BtcIndexerUri,
    BtcIndexerWsUri,
    EthRpcUri,
    EthIndexerUri,
    EthIndexerWsUri,
    WalletContract,
    LpTokenContract,
    WrappedTokenContract,
    BnbRpcUri,
    StakeAddress,
}

impl Slot {
    /// Every slot, in template order.
    pub const ALL: [Slot; 22] = [
        Slot::Moniker,
        Slot::EpochBlocks,
        Slot::PreferredUri,
        Slot::IsTestnet,
        Slot::CoinA,
        Slot::CoinB,
        Slot::StopTriggerUri,
        Slot::Threshold,
        Slot::MaxShares,
        Slot::MaxNodes,
        Slot::KeygenPeers,
        Slot::KeygenUntil,
        Slot::BtcIndexerUri,
        Slot::BtcIndexerWsUri,
        Slot::EthRpcUri,
        Slot::EthIndexerUri,
        Slot::EthIndexerWsUri,
        Slot::WalletContract,
        Slot::LpTokenContract,
        Slot::WrappedTokenContract,
        Slot::BnbRpcUri,
        Slot::StakeAddress,
    ];

    /// Bare slot name, used in error notices.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Moniker => "node_moniker_placeholder",
            Slot::EpochBlocks => "epoch_block",
            Slot::PreferredUri => "node_preferred_uri",
            Slot::IsTestnet => "is_testnet",
            Slot::CoinA => "coin_A",
            Slot::CoinB => "coin_B",
            Slot::StopTriggerUri => "stop_trigger_uri",
            Slot::Threshold => "threshold_placeholder",
            Slot::MaxShares => "max_shares",
            Slot::MaxNodes => "max_nodes",
            Slot::KeygenPeers => "keygen_peers",
            Slot::KeygenUntil => "keygen_until",
            Slot::BtcIndexerUri => "btc_blockbook_endpoint",
            Slot::BtcIndexerWsUri => "btc_blockbook_ws_endpoint",
            Slot::EthRpcUri => "eth_rpc_endpoint",
            Slot::EthIndexerUri => "eth_blockbook_endpoint",
            Slot::EthIndexerWsUri => "eth_blockbook_ws_endpoint",
            Slot::WalletContract => "eth_wallet_contract",
            Slot::LpTokenContract => "eth_lpt_contract",
            Slot::WrappedTokenContract => "btc_token_contract_addr",
            Slot::BnbRpcUri => "rpc_uri_placeholder",
            Slot::StakeAddress => "stake_addr",
        }
    }

    /// Placeholder token as it appears in the template.
    pub fn token(self) -> String {
        format!("**{}**", self.name())
    }

    /// Optional slots render as empty string when unset; required slots
    /// fail the render instead.
    pub fn required(self) -> bool {
        !matches!(self, Slot::PreferredUri | Slot::StakeAddress)
    }

    /// Resolved value from the record, if any.
    fn value(self, cfg: &NodeConfig) -> Option<String> {
        match self {
            Slot::Moniker => non_empty(&cfg.moniker),
            Slot::EpochBlocks => Some(cfg.epoch_blocks.to_string()),
            Slot::PreferredUri => cfg.preferred_uri.clone(),
            Slot::IsTestnet => Some(cfg.testnet.to_string()),
            Slot::CoinA => non_empty(&cfg.coin_a),
            Slot::CoinB => non_empty(&cfg.coin_b),
            Slot::StopTriggerUri => non_empty(&cfg.stop_trigger_uri),
            Slot::Threshold => Some(cfg.threshold.to_string()),
            Slot::MaxShares => Some(cfg.max_shares.to_string()),
            Slot::MaxNodes => Some(cfg.max_nodes.to_string()),
            Slot::KeygenPeers => Some(cfg.keygen_peers.to_string()),
            Slot::KeygenUntil => non_empty(&cfg.keygen_until),
            Slot::BtcIndexerUri => cfg.btc_indexer_uri.clone(),
            Slot::BtcIndexerWsUri => cfg.btc_indexer_ws_uri.clone(),
            Slot::EthRpcUri => cfg.rpc_uri.clone(),
            Slot::EthIndexerUri => cfg.eth_indexer_uri.clone(),
            Slot::EthIndexerWsUri => cfg.eth_indexer_ws_uri.clone(),
            Slot::WalletContract => non_empty(&cfg.wallet_contract),
            Slot::LpTokenContract => non_empty(&cfg.lp_token_contract),
            Slot::WrappedTokenContract => non_empty(&cfg.wrapped_token_contract),
            Slot::BnbRpcUri => non_empty(&cfg.bnb_rpc_uri),
            Slot::StakeAddress => cfg.stake_address.clone(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Render the record into the deployable artifact.
///
/// Fails with `MissingField` when a required slot has no resolved value
/// (topology/network resolution was skipped or gapped) instead of emitting
/// the literal placeholder.
pub fn render(cfg: &NodeConfig) -> Result<String, SetupError> {
    let mut out = TEMPLATE.to_string();
    for slot in Slot::ALL {
        let value = match slot.value(cfg) {
            Some(v) => v,
            None if slot.required() => return Err(SetupError::MissingField(slot.name())),
            None => String::new(),
        };
        out = out.replace(&slot.token(), &value);
    }
    // A token here means a template/slot mismatch; never ship it.
    if out.contains("**") {
        return Err(SetupError::MissingField("unsubstituted placeholder"));
    }
    Ok(out)
}
