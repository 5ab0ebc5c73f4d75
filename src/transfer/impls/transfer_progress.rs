use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use crate::transfer::structs::transfer_progress::TransferProgress;
use crate::transfer::traits::progress_sink::ProgressSink;

impl TransferProgress {
    pub fn new(file_name: &str, remote: SocketAddr) -> TransferProgress
    {
        TransferProgress {
            file_name: file_name.to_string(),
            remote,
            total: AtomicU64::new(0),
            transferred: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    /// Completion in whole percent; an empty file counts as done.
    pub fn percent(&self) -> u8
    {
        let total = self.total.load(Ordering::Relaxed);
        let transferred = self.transferred.load(Ordering::Relaxed);
        if total == 0 {
            return 100;
        }
        ((transferred.min(total) * 100) / total) as u8
    }

    pub fn transferred(&self) -> u64
    {
        self.transferred.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64
    {
        self.total.load(Ordering::Relaxed)
    }
}

impl ProgressSink for TransferProgress {
    fn set_total(&self, total: u64)
    {
        self.total.store(total, Ordering::Relaxed);
    }

    fn advance(&self, bytes: u64)
    {
        self.transferred.fetch_add(bytes, Ordering::Relaxed);
    }
}
