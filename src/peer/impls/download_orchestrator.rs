use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{info, warn};
use rand::RngExt;
use tokio::sync::Mutex;
use crate::config::structs::peer_config::PeerConfig;
use crate::peer::enums::download_outcome::DownloadOutcome;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::download_orchestrator::DownloadOrchestrator;
use crate::peer::structs::download_report::DownloadReport;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::peer::structs::upload_service::UploadService;
use crate::protocol::enums::ack_outcome::AckOutcome;
use crate::protocol::enums::tracker_reply::TrackerReply;
use crate::protocol::structs::download_ack::DownloadAck;
use crate::transfer::structs::transfer_progress::TransferProgress;
use crate::transfer::transfer::{check_file_name, request_file};

impl DownloadOrchestrator {
    pub fn new(config: &PeerConfig, uploads: Arc<UploadService>, serve_ip: IpAddr, ping_port: u16) -> DownloadOrchestrator
    {
        DownloadOrchestrator {
            client: TrackerClient::from_config(config),
            uploads,
            download_dir: PathBuf::from(&config.download_dir),
            serve_ip,
            ping_port,
            connect_timeout: Duration::from_millis(config.tracker_timeout_ms),
            download_lock: Mutex::new(()),
        }
    }

    /// Downloads `file_name` through `tracker` and re-shares it on `serve_port`
    /// (0 picks a port).
    ///
    /// Every outcome except "not found" is acknowledged to the tracker. On
    /// success the re-share listener is running before the ack leaves, so the
    /// advertised port is already served.
    pub async fn download(&self, tracker: SocketAddr, file_name: &str, serve_port: u16) -> Result<DownloadOutcome, PeerError>
    {
        check_file_name(file_name)?;
        let _guard = self.download_lock.lock().await;

        match self.fetch(tracker, file_name, serve_port).await {
            Ok(None) => {
                info!("[DOWNLOAD] {file_name} not found on network");
                Ok(DownloadOutcome::NotFound)
            }
            Ok(Some(report)) => {
                self.acknowledge(tracker, file_name, report.serve_port, AckOutcome::Success).await;
                info!("[DOWNLOAD] {file_name}: {} bytes from {} in {:?}, serving on port {}", report.bytes, report.holder, report.elapsed, report.serve_port);
                Ok(DownloadOutcome::Completed(report))
            }
            Err(error) => {
                warn!("[DOWNLOAD] {file_name} failed: {error}");
                self.acknowledge(tracker, file_name, serve_port, AckOutcome::Failure).await;
                Err(error)
            }
        }
    }

    async fn fetch(&self, tracker: SocketAddr, file_name: &str, serve_port: u16) -> Result<Option<DownloadReport>, PeerError>
    {
        let holders = match self.client.query(tracker, file_name).await? {
            TrackerReply::NotFound => return Ok(None),
            TrackerReply::Holders(holders) => holders,
        };
        let holder = {
            let mut rng = rand::rng();
            holders[rng.random_range(0..holders.len())]
        };
        info!("[DOWNLOAD] Fetching {file_name} from {holder} ({} holders)", holders.len());

        tokio::fs::create_dir_all(&self.download_dir).await?;
        let path = self.download_dir.join(file_name);
        let progress = TransferProgress::new(file_name, holder);
        let started = Instant::now();
        let bytes = request_file(holder, file_name, &path, self.uploads.buffer_size, self.connect_timeout, &progress).await?;

        let path = tokio::fs::canonicalize(&path).await?;
        self.uploads.shares.insert(file_name, &path);
        let serve = self.uploads.start_listener(self.serve_ip, serve_port, file_name)?;

        Ok(Some(DownloadReport {
            file_name: file_name.to_string(),
            holder,
            path,
            bytes,
            serve_port: serve.port,
            elapsed: started.elapsed(),
        }))
    }

    async fn acknowledge(&self, tracker: SocketAddr, file_name: &str, serve_port: u16, outcome: AckOutcome)
    {
        let ack = DownloadAck {
            file_name: file_name.to_string(),
            server_port: serve_port,
            outcome,
            ping_port: self.ping_port,
        };
        self.client.acknowledge(tracker, &ack).await;
    }
}
