// Integration tests - complete operator sessions against a real data root

#[cfg(test)]
mod guided_setup_tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::config::resolver::NetworkResolver;
    use crate::config::NodeConfig;
    use crate::network::{NetworkCatalog, Topology, NETWORK_BTC_BSC, NETWORK_BTC_ETH};
    use crate::render;
    use crate::storage::ConfigStore;
    use crate::wizard::{NodeSetup, NodeStep};

    fn run_to_completion(setup: &mut NodeSetup<'_>, store: &ConfigStore, answers: &[&str]) {
        for answer in answers {
            setup.input(answer, store).unwrap();
        }
        assert_eq!(setup.step(), NodeStep::Complete);
    }

    #[test]
    fn test_btc_eth_guided_setup_end_to_end() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        let catalog = NetworkCatalog::new();
        let mut setup = NodeSetup::new(&catalog, Topology::Local);

        // Operator picks btc_eth, names the node, skips both reward
        // addresses, stakes from bnb1xyz.
        run_to_completion(
            &mut setup,
            &store,
            &["btc_eth", "node-A", "none", "none", "bnb1xyz"],
        );

        let cfg = setup.config();
        assert_eq!(cfg.threshold, 31);
        assert_eq!(cfg.max_shares, 50);
        assert_eq!(cfg.max_nodes, 60);
        assert_eq!(cfg.keygen_peers, 32);
        assert_eq!(cfg.coin_a, "WBTC");
        assert_eq!(cfg.coin_b, "BTC");
        assert!(cfg.reward_address_eth.is_none());
        assert!(cfg.reward_address_bnb.is_none());

        let artifact = fs::read_to_string(store.artifact_path(NETWORK_BTC_ETH)).unwrap();
        let parsed: toml::Value = toml::from_str(&artifact).unwrap();
        assert_eq!(parsed["swaps"]["coin_1"].as_str(), Some("WBTC"));
        assert_eq!(parsed["swaps"]["coin_2"].as_str(), Some("BTC"));
        assert_eq!(parsed["tss"]["threshold"].as_integer(), Some(31));
        assert_eq!(parsed["bnb"]["stake_addr"].as_str(), Some("bnb1xyz"));
    }

    #[test]
    fn test_btc_bsc_global_topology_setup() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        let catalog = NetworkCatalog::new();
        let mut setup = NodeSetup::new(&catalog, Topology::Global);

        run_to_completion(&mut setup, &store, &["2", "bsc-node", "none", "none", "none"]);

        let artifact = fs::read_to_string(store.artifact_path(NETWORK_BTC_BSC)).unwrap();
        let parsed: toml::Value = toml::from_str(&artifact).unwrap();
        assert_eq!(parsed["swaps"]["coin_1"].as_str(), Some("BTCB"));
        assert_eq!(
            parsed["eth"]["rpc_uri"].as_str(),
            Some("http://btc-bsc-indexer.swingby.network:8575")
        );
        assert_eq!(parsed["general"]["epoch_blocks"].as_integer(), Some(15));
        assert_eq!(parsed["tss"]["keygen_peers"].as_integer(), Some(35));
    }

    #[test]
    fn test_persisted_record_round_trips_for_every_network() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        let catalog = NetworkCatalog::new();
        let resolver = NetworkResolver::new(&catalog);

        for id in catalog.ids() {
            let mut cfg = NodeConfig::new();
            resolver.resolve(&mut cfg, id, Topology::Global).unwrap();
            cfg.moniker = format!("{}-node", id);
            cfg.set_domain(&format!("{}.example.com", id.replace('_', "-"))).unwrap();
            cfg.set_keygen_deadline("2020-12-13T12:00:00Z").unwrap();
            cfg.stake_memo = Some("timelock description".to_string());

            store.save(&cfg).unwrap();
            assert_eq!(store.load(id).unwrap(), cfg);
        }
    }

    #[test]
    fn test_preferred_uri_survives_network_switch() {
        let catalog = NetworkCatalog::new();
        let resolver = NetworkResolver::new(&catalog);
        let mut cfg = NodeConfig::new();

        cfg.set_domain("node.example.com").unwrap();
        resolver
            .resolve(&mut cfg, NETWORK_BTC_BSC, Topology::Local)
            .unwrap();
        resolver
            .resolve(&mut cfg, NETWORK_BTC_ETH, Topology::Global)
            .unwrap();

        assert_eq!(cfg.preferred_uri.as_deref(), Some("https://node.example.com"));
        assert_eq!(cfg.domain.as_deref(), Some("node.example.com"));
    }

    #[test]
    fn test_later_session_overwrites_same_network() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        let catalog = NetworkCatalog::new();

        let mut first = NodeSetup::new(&catalog, Topology::Local);
        run_to_completion(&mut first, &store, &["1", "first", "none", "none", "none"]);

        let mut second = NodeSetup::new(&catalog, Topology::Local);
        run_to_completion(&mut second, &store, &["1", "second", "none", "none", "bnb1xyz"]);

        let stored = store.load(NETWORK_BTC_ETH).unwrap();
        assert_eq!(stored.moniker, "second");
        assert_eq!(stored.stake_address.as_deref(), Some("bnb1xyz"));

        let artifact = fs::read_to_string(store.artifact_path(NETWORK_BTC_ETH)).unwrap();
        assert!(artifact.contains("moniker = \"second\""));
    }

    #[test]
    fn test_finishing_twice_produces_identical_artifact() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        let catalog = NetworkCatalog::new();
        let mut setup = NodeSetup::new(&catalog, Topology::Local);

        run_to_completion(&mut setup, &store, &["1", "node-A", "none", "none", "none"]);
        let first = fs::read_to_string(store.artifact_path(NETWORK_BTC_ETH)).unwrap();

        setup.finish(&store).unwrap();
        let second = fs::read_to_string(store.artifact_path(NETWORK_BTC_ETH)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rendered_artifact_matches_direct_render_of_stored_record() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        let catalog = NetworkCatalog::new();
        let mut setup = NodeSetup::new(&catalog, Topology::Local);

        run_to_completion(&mut setup, &store, &["1", "node-A", "none", "none", "none"]);

        let stored = store.load(NETWORK_BTC_ETH).unwrap();
        let direct = render::render(&stored).unwrap();
        let artifact = fs::read_to_string(store.artifact_path(NETWORK_BTC_ETH)).unwrap();
        assert_eq!(direct, artifact);
    }
}
