use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::peer::structs::upload_service::UploadService;

#[derive(Debug)]
pub struct DownloadOrchestrator {
    pub client: TrackerClient,
    pub uploads: Arc<UploadService>,
    pub download_dir: PathBuf,
    pub serve_ip: IpAddr,
    pub ping_port: u16,
    pub connect_timeout: Duration,
    /// Held for the whole workflow; one download at a time.
    pub(crate) download_lock: Mutex<()>,
}
