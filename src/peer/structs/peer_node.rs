use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::peer::structs::download_orchestrator::DownloadOrchestrator;
use crate::peer::structs::upload_service::UploadService;

#[derive(Debug)]
pub struct PeerNode {
    pub config: Arc<Configuration>,
    pub uploads: Arc<UploadService>,
    pub downloads: DownloadOrchestrator,
}
