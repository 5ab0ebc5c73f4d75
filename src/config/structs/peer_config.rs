use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PeerConfig {
    pub server_port: u16,
    pub ping_bind_address: String,
    pub upload_workers: usize,
    pub buffer_size: usize,
    pub max_listeners: usize,
    pub download_dir: String,
    pub tracker_timeout_ms: u64,
    /// Zero waits forever for a `get` reply.
    pub query_timeout_ms: u64,
    /// Bounds the upload request read and every stalled upload write.
    pub transfer_timeout_ms: u64,
    pub default_tracker_port: u16,
}
