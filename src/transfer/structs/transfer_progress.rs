use std::net::SocketAddr;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

/// Live counters for one running upload or download.
#[derive(Debug)]
pub struct TransferProgress {
    pub file_name: String,
    pub remote: SocketAddr,
    pub total: AtomicU64,
    pub transferred: AtomicU64,
    pub started: Instant,
}
