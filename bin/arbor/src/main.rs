use std::time::{Duration, SystemTime, UNIX_EPOCH};

use alloy_primitives::B256;
use anyhow::Context;
use arbor::cli::{Cli, Commands, NodeCommand};
use arbor_consensus::{
    beacon_block_header::BeaconBlockHeader,
    committee::CommitteeCache,
    fork_choice::{
        helpers::constants::{GENESIS_SLOT, SECONDS_PER_SLOT},
        store::get_forkchoice_store,
    },
};
use arbor_executor::ArborExecutor;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Set the default log level to `info` if not set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Node(command) => run_node(command),
    }
}

fn run_node(command: NodeCommand) -> anyhow::Result<()> {
    let genesis_time = match command.genesis_time {
        Some(genesis_time) => genesis_time,
        None => unix_now()?,
    };

    let anchor_block = BeaconBlockHeader {
        slot: GENESIS_SLOT,
        proposer_index: 0,
        parent_root: B256::ZERO,
        state_root: B256::ZERO,
        body_root: B256::ZERO,
    };
    let mut store = get_forkchoice_store(anchor_block, CommitteeCache::default(), genesis_time);

    info!(genesis_time, "Starting node");

    let executor = ArborExecutor::new()?;
    let ticker = executor.spawn_cancellable(move |mut shutdown| async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SECONDS_PER_SLOT));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Ok(now) = unix_now() {
                        store.on_tick(now);
                        info!(
                            slot = store.get_current_slot(),
                            epoch = store.get_current_epoch(),
                            "Slot tick"
                        );
                    }
                }
                _ = shutdown.recv() => break,
            }
        }
    });

    executor.runtime().block_on(ticker)?;
    info!("Node stopped");
    Ok(())
}

fn unix_now() -> anyhow::Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_secs())
}
