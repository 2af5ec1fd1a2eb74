// Bridge node installer - Entry point
// Principle: the engine validates and renders; deployment stays external

#![allow(dead_code)]

mod config;
mod error;
mod network;
mod render;
mod status;
mod storage;
mod wizard;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::network::{NetworkCatalog, Topology};
use crate::status::StatusHandle;
use crate::storage::ConfigStore;
use crate::wizard::{NodeSetup, NodeStep, ServerSetup, ServerStep};

/// Guided configuration for bridge node deployments.
#[derive(Parser, Debug)]
#[command(name = "bridge-installer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Configure a bridge node and render its deployable config")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Data root holding per-network config directories
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the guided node configuration steps
    SetupNode {
        /// Point endpoints at the public indexer hosts instead of the
        /// local deployment
        #[arg(long, default_value = "false")]
        global: bool,
    },
    /// Collect server IP, login and SSH key for deployment
    SetupServer,
    /// Attach a subdomain to a configured network and refresh its artifact
    SetupDomain {
        /// Network identifier the domain belongs to
        network: String,
        /// Subdomain, e.g. testnode-1.example.com
        domain: String,
    },
    /// Print the stored configuration for a network
    Show {
        /// Network identifier
        network: String,
    },
    /// Print the live syncing status
    CheckStatus,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter)),
        )
        .init();

    print_banner();

    let data_root = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let store = ConfigStore::new(&data_root);
    let catalog = NetworkCatalog::new();

    match cli.command {
        Commands::SetupNode { global } => {
            let topology = if global {
                Topology::Global
            } else {
                Topology::Local
            };
            run_node_setup(&catalog, &store, topology)?;
        }
        Commands::SetupServer => {
            run_server_setup()?;
        }
        Commands::SetupDomain { network, domain } => {
            run_setup_domain(&store, &network, &domain)?;
        }
        Commands::Show { network } => {
            show_config(&store, &network)?;
        }
        Commands::CheckStatus => {
            // Written by the deployment collaborator while a node syncs;
            // a fresh session starts from an empty snapshot.
            let status = StatusHandle::new();
            println!("{}", status.report());
        }
    }

    Ok(())
}

fn print_banner() {
    println!();
    println!(
        "{}",
        style("  Bridge node installer - guided configuration").cyan().bold()
    );
    println!("  Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bridge-installer")
}

fn run_node_setup(
    catalog: &NetworkCatalog,
    store: &ConfigStore,
    topology: Topology,
) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let mut setup = NodeSetup::new(catalog, topology);
    info!(topology = %topology, data_root = %store.data_root().display(), "starting node setup");

    loop {
        println!("\n{}", setup.prompt());
        let answer: String = Input::with_theme(&theme)
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;

        match setup.input(&answer, store) {
            Ok(NodeStep::Complete) => {
                println!("\n{}", setup.prompt());
                println!(
                    "  artifact: {}",
                    style(store.artifact_path(&setup.config().network).display()).green()
                );
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}", style(e.operator_notice()).red());
                // A failed render/save leaves the wizard at Complete;
                // re-invoking the final step is the recovery path.
                while setup.step() == NodeStep::Complete {
                    let retry = Confirm::with_theme(&theme)
                        .with_prompt("Retry rendering and saving now?")
                        .default(true)
                        .interact()?;
                    if !retry {
                        return Ok(());
                    }
                    match setup.finish(store) {
                        Ok(()) => {
                            println!("\n{}", setup.prompt());
                            return Ok(());
                        }
                        Err(e) => eprintln!("{}", style(e.operator_notice()).red()),
                    }
                }
            }
        }
    }
}

fn run_server_setup() -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let mut setup = ServerSetup::new();

    while setup.step() != ServerStep::Ready {
        println!("\n{}", setup.prompt());
        let answer: String = Input::with_theme(&theme)
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;
        if let Err(e) = setup.input(&answer) {
            eprintln!("{}", style(e.operator_notice()).red());
        }
    }
    println!("\n{}", setup.prompt());
    Ok(())
}

fn run_setup_domain(store: &ConfigStore, network: &str, domain: &str) -> anyhow::Result<()> {
    let mut cfg = match store.load(network) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", style(e.operator_notice()).red());
            return Ok(());
        }
    };

    if let Err(e) = cfg.set_domain(domain) {
        eprintln!("{}", style(e.operator_notice()).red());
        return Ok(());
    }
    store.save(&cfg)?;
    println!(
        "Your server subdomain is {} ({})",
        style(domain).bold(),
        cfg.preferred_uri.as_deref().unwrap_or_default()
    );

    // Keep an already-rendered artifact in step with the record.
    if store.exists(network) {
        let artifact = render::render(&cfg)?;
        store.save_artifact(network, &artifact)?;
        println!("Artifact refreshed with the new preferred URI.");
    }
    println!("Attach the domain A record to your server before deploying.");
    Ok(())
}

fn show_config(store: &ConfigStore, network: &str) -> anyhow::Result<()> {
    let cfg = match store.load(network) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", style(e.operator_notice()).red());
            return Ok(());
        }
    };

    println!("{}", style(format!("[{}]", cfg.network)).cyan().bold());
    println!("  moniker:        {}", cfg.moniker);
    println!(
        "  domain:         {}",
        cfg.domain.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  preferred URI:  {}",
        cfg.preferred_uri.as_deref().unwrap_or("(not set)")
    );
    println!("  coin pair:      {} / {}", cfg.coin_a, cfg.coin_b);
    println!(
        "  tss:            threshold {} / shares {} / nodes {} / keygen peers {}",
        cfg.threshold, cfg.max_shares, cfg.max_nodes, cfg.keygen_peers
    );
    println!("  epoch blocks:   {}", cfg.epoch_blocks);
    println!(
        "  stake address:  {}",
        cfg.stake_address.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  rpc endpoint:   {}",
        cfg.rpc_uri.as_deref().unwrap_or("(unresolved)")
    );
    for peer in &cfg.bootstrap_peers {
        println!("  bootstrap peer: {}", peer);
    }
    println!(
        "  artifact:       {}",
        if store.exists(network) {
            style("rendered").green()
        } else {
            style("not rendered yet").yellow()
        }
    );
    Ok(())
}
