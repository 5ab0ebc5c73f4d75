use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use crate::config::structs::configuration::Configuration;
use crate::peer::enums::download_outcome::DownloadOutcome;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::download_orchestrator::DownloadOrchestrator;
use crate::peer::structs::local_share_table::LocalShareTable;
use crate::peer::structs::peer_node::PeerNode;
use crate::peer::structs::share_report::ShareReport;
use crate::peer::structs::upload_service::UploadService;
use crate::protocol::protocol::SHARE_OK_PREFIX;
use crate::transfer::transfer::check_file_name;

impl PeerNode {
    /// `serve_ip` is the address upload listeners bind to; `ping_port` is
    /// advertised to trackers for liveness probes.
    pub fn new(config: Arc<Configuration>, serve_ip: IpAddr, ping_port: u16) -> PeerNode
    {
        let shares = Arc::new(LocalShareTable::new());
        let uploads = Arc::new(UploadService::new(
            shares,
            config.peer.upload_workers,
            config.peer.buffer_size,
            config.peer.max_listeners,
            Duration::from_millis(config.peer.transfer_timeout_ms),
        ));
        let downloads = DownloadOrchestrator::new(&config.peer, uploads.clone(), serve_ip, ping_port);
        PeerNode { config, uploads, downloads }
    }

    /// Serves `path` on `port` and registers it with `tracker`. The listener is
    /// withdrawn again when the tracker does not confirm.
    pub async fn share(&self, path: &Path, tracker: SocketAddr, port: u16) -> Result<ShareReport, PeerError>
    {
        let metadata = tokio::fs::metadata(path).await.map_err(|_| PeerError::NotAFile(path.to_path_buf()))?;
        if !metadata.is_file() {
            return Err(PeerError::NotAFile(path.to_path_buf()));
        }
        let file_name = path.file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PeerError::NotAFile(path.to_path_buf()))?
            .to_string();
        check_file_name(&file_name)?;

        let path = tokio::fs::canonicalize(path).await?;
        let claimed = match self.uploads.shares.claim(&file_name, &path) {
            Ok(claimed) => claimed,
            Err(existing) => {
                warn!("[UPLOAD] {file_name} is already shared from {}, refusing {}", existing.display(), path.display());
                return Err(PeerError::NameConflict { file_name, existing });
            }
        };
        let serve = match self.uploads.start_listener(self.downloads.serve_ip, port, &file_name) {
            Ok(serve) => serve,
            Err(error) => {
                self.release(&file_name, claimed);
                return Err(error);
            }
        };

        let reply = match self.downloads.client.share(tracker, &file_name, serve.port, self.downloads.ping_port).await {
            Ok(reply) => reply,
            Err(error) => {
                self.withdraw(&file_name, serve.port, serve.created, claimed);
                return Err(error);
            }
        };
        if !reply.starts_with(SHARE_OK_PREFIX) {
            self.withdraw(&file_name, serve.port, serve.created, claimed);
            return Err(PeerError::ShareRejected(reply));
        }
        info!("[UPLOAD] {file_name} registered with {tracker} on port {}", serve.port);
        Ok(ShareReport { file_name, serve_port: serve.port, reply })
    }

    pub async fn get(&self, file_name: &str, tracker: SocketAddr, port: u16) -> Result<DownloadOutcome, PeerError>
    {
        self.downloads.download(tracker, file_name, port).await
    }

    fn withdraw(&self, file_name: &str, port: u16, created: bool, claimed: bool)
    {
        if created {
            warn!("[UPLOAD] Share not confirmed, closing port {port}");
            self.uploads.stop_listener(port);
        }
        self.release(file_name, claimed);
    }

    fn release(&self, file_name: &str, claimed: bool)
    {
        if claimed {
            self.uploads.shares.remove(file_name);
        }
    }
}
