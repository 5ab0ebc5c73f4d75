use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DownloadReport {
    pub file_name: String,
    pub holder: SocketAddr,
    pub path: PathBuf,
    pub bytes: u64,
    /// Port the file is now re-shared on.
    pub serve_port: u16,
    pub elapsed: Duration,
}
