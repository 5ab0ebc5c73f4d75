use std::sync::Arc;
use std::time::Duration;
use crate::liveness::traits::peer_probe::PeerProbe;
use crate::tracker::structs::file_tracker::FileTracker;

pub struct LivenessMonitor {
    pub tracker: Arc<FileTracker>,
    pub probe: Arc<dyn PeerProbe>,
    pub interval: Duration,
    pub max_concurrent: usize,
}
