/// Receives byte counts while a transfer runs.
pub trait ProgressSink: Send + Sync {
    fn set_total(&self, total: u64);
    fn advance(&self, bytes: u64);
}
