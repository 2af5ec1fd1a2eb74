//! Operator-facing prompt text, one rendering function per wizard state.
//!
//! This is the only surface exposed to the conversational transport; it
//! turns the current record into display text and never performs I/O.

use crate::config::NodeConfig;
use crate::network::NetworkProfile;
use crate::wizard::{NodeStep, ServerConfig, ServerStep};

/// Prompt for the current node-configuration step.
pub fn node_prompt(step: NodeStep, cfg: &NodeConfig, profile: Option<&NetworkProfile>) -> String {
    match step {
        NodeStep::AwaitNetwork => format!(
            "OK.\n\
             This step generates the node config.\n\
             Please put the target network number from the following list.\n\n\
             now: {}\n\n\
             1) BTC --- Ethereum (mainnet)\n\
             2) BTC --- Binance chain (mainnet)\n\n\
             [Configuration step 1/5]\n\
             if you want to keep the current network, type 'none'",
            cfg.network
        ),
        NodeStep::AwaitMoniker => format!(
            "OK. What is your node moniker?\n\n\
             now: {}\n\n\
             [Configuration step 2/5]\n\
             if you want to skip, type 'none'",
            cfg.moniker
        ),
        NodeStep::AwaitRewardEth => format!(
            "OK. Please put your ETH reward address.\n\
             now: {}\n\
             [Configuration step 3/5]\n\
             if you want to skip, type 'none'",
            cfg.reward_address_eth.as_deref().unwrap_or("(not set)")
        ),
        NodeStep::AwaitRewardBnb => format!(
            "OK. Please put your BNB reward address.\n\
             now: {}\n\
             [Configuration step 4/5]\n\
             if you want to skip, type 'none'",
            cfg.reward_address_bnb.as_deref().unwrap_or("(not set)")
        ),
        NodeStep::AwaitStakeAddress => {
            let memo = cfg
                .stake_memo
                .as_deref()
                .map(|m| format!("\ntimelock description:\n\n{}\n", m))
                .unwrap_or_default();
            format!(
                "Your staking BNB address is:\n\n\
                 now: {}\n\n\
                 Could you put your BNB staking address?\n\
                 [Configuration step 5/5]\n\
                 if you want to skip, type 'none'{}",
                cfg.stake_address.as_deref().unwrap_or("(not set)"),
                memo
            )
        }
        NodeStep::Complete => {
            let disk_note = profile
                .map(|p| {
                    format!(
                        "\nMake sure the data mount path has at least {} free before deploying.",
                        format_mib(p.min_mount_path_mib)
                    )
                })
                .unwrap_or_default();
            format!(
                "Congratulations!\n\
                 Your node config for {} has been updated.{}",
                cfg.network, disk_note
            )
        }
    }
}

/// Prompt for the current server-bootstrap step.
pub fn server_prompt(step: ServerStep, server: &ServerConfig) -> String {
    match step {
        ServerStep::AwaitIp => "OK.\n\
             Please let me know your server IP address (only IPv4 is accepted).\n\
             [Configuration step 1/3]"
            .to_string(),
        ServerStep::AwaitUsername => format!(
            "OK. Your server IP is {}.\n\
             [Configuration step 2/3]\n\
             Please put your server login username.\n\n\
             now: {}\n\n\
             if you want to skip, type 'none'",
            server
                .ip
                .map(|ip| ip.to_string())
                .unwrap_or_else(|| "(not set)".to_string()),
            server.username
        ),
        ServerStep::AwaitSshKey => format!(
            "OK. Your server login username is {}.\n\
             [Configuration step 3/3]\n\
             Please paste the PEM private key block used to reach the server.",
            server.username
        ),
        ServerStep::Ready => format!(
            "Your server is ready.\n\
             IP: {}, login: {}",
            server
                .ip
                .map(|ip| ip.to_string())
                .unwrap_or_else(|| "(not set)".to_string()),
            server.username
        ),
    }
}

fn format_mib(mib: u64) -> String {
    const MIB_PER_TIB: u64 = 1024 * 1024;
    if mib >= MIB_PER_TIB {
        format!("{:.1} TiB", mib as f64 / MIB_PER_TIB as f64)
    } else {
        format!("{} GiB", mib / 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkCatalog;

    #[test]
    fn test_prompts_reflect_current_values() {
        let mut cfg = NodeConfig::new();
        cfg.moniker = "node-A".to_string();
        let text = node_prompt(NodeStep::AwaitMoniker, &cfg, None);
        assert!(text.contains("now: node-A"));
        assert!(text.contains("'none'"));
    }

    #[test]
    fn test_network_prompt_lists_choices() {
        let cfg = NodeConfig::new();
        let text = node_prompt(NodeStep::AwaitNetwork, &cfg, None);
        assert!(text.contains("1) BTC --- Ethereum"));
        assert!(text.contains("2) BTC --- Binance chain"));
        assert!(text.contains("now: btc_eth"));
    }

    #[test]
    fn test_complete_prompt_names_disk_requirement() {
        let catalog = NetworkCatalog::new();
        let cfg = NodeConfig::new();
        let profile = catalog.profile("btc_eth").unwrap();
        let text = node_prompt(NodeStep::Complete, &cfg, Some(profile));
        assert!(text.contains("Congratulations"));
        assert!(text.contains("TiB"));
    }

    #[test]
    fn test_server_prompts_follow_step_counters() {
        let mut server = ServerConfig::default();
        assert!(server_prompt(ServerStep::AwaitIp, &server).contains("step 1/3"));
        server.ip = Some("203.0.113.7".parse().unwrap());
        let text = server_prompt(ServerStep::AwaitUsername, &server);
        assert!(text.contains("203.0.113.7"));
        assert!(text.contains("step 2/3"));
    }

    #[test]
    fn test_format_mib_scales() {
        assert_eq!(format_mib(1_430_511), "1.4 TiB");
        assert_eq!(format_mib(965_978), "943 GiB");
    }
}
