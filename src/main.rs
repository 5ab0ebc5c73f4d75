use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use tokio::io::AsyncBufReadExt;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use filemesh::common::common::setup_logging;
use filemesh::config::structs::configuration::Configuration;
use filemesh::federation::federation::{federation_service, join_seed_trackers};
use filemesh::liveness::liveness::liveness_service;
use filemesh::peer::enums::peer_command::PeerCommand;
use filemesh::peer::peer::{ping_service, run_command, PEER_USAGE};
use filemesh::peer::structs::peer_node::PeerNode;
use filemesh::structs::{Cli, Mode};
use filemesh::tracker::structs::file_tracker::FileTracker;
use filemesh::udp::udp::udp_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("Could not set up logging: {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            match args.command {
                Mode::Tracker => run_tracker(config).await,
                Mode::Peer => run_peer(config).await,
            }
        });
    Ok(())
}

async fn run_tracker(config: Arc<Configuration>)
{
    let tracker = Arc::new(FileTracker::new(config.clone()));
    let Ok(tokio_shutdown) = Shutdown::new() else {
        error!("[BOOT] Could not install the shutdown handler");
        exit(1);
    };
    let (tx, rx) = tokio::sync::watch::channel(false);

    let udp_handle = match udp_service(tracker.clone(), rx.clone()).await {
        Ok((_, handle)) => handle,
        Err(error) => {
            error!("[UDP] Could not listen on {}: {error}", config.tracker.udp_bind_address);
            exit(1);
        }
    };

    let federation_handle = match federation_service(tracker.clone(), rx.clone()).await {
        Ok(handle) => handle,
        Err(error) => {
            error!("[FEDERATION] Could not start federation listeners: {error}");
            exit(1);
        }
    };
    if !config.federation.seed_trackers.is_empty() {
        info!("[BOOT] Joining {} seed trackers...", config.federation.seed_trackers.len());
        tokio::spawn(join_seed_trackers(tracker.clone()));
    }

    info!("[BOOT] Starting liveness sweeps every {} seconds...", config.liveness.interval);
    let liveness_handle = liveness_service(tracker.clone(), rx.clone());

    let stats_handler = tokio_shutdown.clone();
    let tracker_spawn_stats = tracker.clone();
    let console_interval = config.log_console_interval;
    info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(console_interval.max(1)));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let stats = tracker_spawn_stats.get_stats();
                    info!(
                        "[STATS] Peers: {} | Shares: {} | Queries: {} | Acks: {} | Invalid: {} | Dropped: {}",
                        stats.peers, stats.shares_handled, stats.queries_handled, stats.acks_handled,
                        stats.invalid_requests, stats.datagrams_dropped
                    );
                    info!(
                        "[STATS FEDERATION] Trackers: {} | Forwarded: {} | Hits: {} | Served: {} | Probes: {} | Evicted: {}",
                        stats.trackers_known, stats.lookups_forwarded, stats.federation_hits, stats.lookups_served,
                        stats.probes_sent, stats.peers_evicted
                    );
                }
                _ = stats_handler.handle() => {
                    info!("[BOOT] Shutting down thread for console updates...");
                    return;
                }
            }
        }
    });

    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!("[BOOT] Could not listen for Ctrl-C: {error}");
    }
    info!("Shutdown request received, shutting down...");
    let _ = tx.send(true);
    for handle in [udp_handle, federation_handle, liveness_handle] {
        let _ = handle.await;
    }
    tokio_shutdown.handle().await;
    info!("Server shutting down completed");
}

async fn run_peer(config: Arc<Configuration>)
{
    let (tx, rx) = tokio::sync::watch::channel(false);
    let ping_bind: SocketAddr = match config.peer.ping_bind_address.parse() {
        Ok(address) => address,
        Err(error) => {
            error!("[PING] Invalid ping_bind_address: {error}");
            exit(1);
        }
    };
    let (ping_addr, ping_handle) = match ping_service(ping_bind, rx).await {
        Ok(service) => service,
        Err(error) => {
            error!("[PING] Could not listen on {ping_bind}: {error}");
            exit(1);
        }
    };

    let node = Arc::new(PeerNode::new(config.clone(), ping_bind.ip(), ping_addr.port()));
    println!("{PEER_USAGE}");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(error) => {
                        error!("Could not read from stdin: {error}");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<PeerCommand>() {
                    Ok(PeerCommand::Quit) => break,
                    Ok(command) => {
                        let node = node.clone();
                        tokio::spawn(async move {
                            println!("{}", run_command(node, command).await);
                        });
                    }
                    Err(usage) => println!("{usage}"),
                }
            }
        }
    }

    info!("Shutting down peer...");
    let _ = tx.send(true);
    node.uploads.stop_all();
    let _ = ping_handle.await;
}
