use std::net::SocketAddr;
use std::time::Duration;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct UploadSnapshot {
    pub file_name: String,
    pub remote: SocketAddr,
    pub sent: u64,
    pub total: u64,
    pub elapsed: Duration,
}
