use std::sync::Arc;
use std::time::{Duration, Instant};
use futures_util::future::join_all;
use log::{debug, info};
use tokio::sync::Semaphore;
use crate::common::common::shutdown_waiting;
use crate::liveness::structs::liveness_monitor::LivenessMonitor;
use crate::liveness::structs::sweep_report::SweepReport;
use crate::liveness::traits::peer_probe::PeerProbe;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::file_tracker::FileTracker;

impl LivenessMonitor {
    pub fn new(tracker: Arc<FileTracker>, probe: Arc<dyn PeerProbe>) -> LivenessMonitor
    {
        let interval = Duration::from_secs(tracker.config.liveness.interval);
        let max_concurrent = tracker.config.liveness.max_concurrent_probes.max(1);
        LivenessMonitor { tracker, probe, interval, max_concurrent }
    }

    pub async fn run(&self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        loop {
            if shutdown_waiting(self.interval, &mut rx).await {
                info!("[LIVENESS] Stopping liveness monitor...");
                break;
            }
            self.sweep().await;
        }
    }

    /// Probes every registered peer once and evicts those that stayed silent.
    pub async fn sweep(&self) -> SweepReport
    {
        let records = self.tracker.registry.snapshot();
        if records.is_empty() {
            return SweepReport::default();
        }

        let permits = Arc::new(Semaphore::new(self.max_concurrent));
        let probes = records.iter().map(|record| {
            let permits = permits.clone();
            let probe = self.probe.clone();
            async move {
                let _permit = permits.acquire().await.ok();
                (record.key(), probe.probe(record).await)
            }
        });
        let results = join_all(probes).await;

        let (alive, dead): (Vec<_>, Vec<_>) = results.into_iter().partition(|(_, answered)| *answered);
        let alive: Vec<_> = alive.into_iter().map(|(key, _)| key).collect();
        let dead: Vec<_> = dead.into_iter().map(|(key, _)| key).collect();

        let removed = self.tracker.registry.apply_sweep(&alive, &dead, Instant::now());
        for record in &removed {
            info!("[LIVENESS] Peer {} is dead, dropped {} shared files", record.key(), record.shared_files.len());
        }

        self.tracker.update_stats(StatsEvent::ProbesSent, records.len() as i64);
        self.tracker.update_stats(StatsEvent::PeersEvicted, removed.len() as i64);
        self.tracker.set_stats(StatsEvent::Peers, self.tracker.registry.len() as i64);
        debug!("[LIVENESS] Sweep probed {} peers, {} alive, {} evicted", records.len(), alive.len(), removed.len());

        SweepReport {
            probed: records.len(),
            alive: alive.len(),
            evicted: removed.iter().map(|record| record.key()).collect(),
        }
    }
}
