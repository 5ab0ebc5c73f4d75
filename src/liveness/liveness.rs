use std::sync::Arc;
use log::info;
use tokio::task::JoinHandle;
use crate::liveness::structs::liveness_monitor::LivenessMonitor;
use crate::liveness::structs::udp_peer_probe::UdpPeerProbe;
use crate::tracker::structs::file_tracker::FileTracker;

/// Spawns the monitor with the UDP probe configured from `[liveness]`.
pub fn liveness_service(tracker: Arc<FileTracker>, rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    let probe = Arc::new(UdpPeerProbe::from_config(&tracker.config.liveness));
    let monitor = LivenessMonitor::new(tracker, probe);
    info!("[LIVENESS] Sweeping every {:?}", monitor.interval);
    tokio::spawn(async move { monitor.run(rx).await })
}
