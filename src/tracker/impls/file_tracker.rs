use std::sync::Arc;
use std::sync::atomic::Ordering;
use chrono::Utc;
use crate::config::structs::configuration::Configuration;
use crate::federation::structs::tracker_address_book::TrackerAddressBook;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::tracker::structs::peer_registry::PeerRegistry;

impl FileTracker {
    pub fn new(config: Arc<Configuration>) -> FileTracker
    {
        let stats = StatsAtomics::default();
        stats.started.store(Utc::now().timestamp(), Ordering::SeqCst);

        FileTracker {
            config,
            registry: Arc::new(PeerRegistry::new()),
            address_book: Arc::new(TrackerAddressBook::new()),
            stats: Arc::new(stats),
        }
    }
}
