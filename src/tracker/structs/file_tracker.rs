use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::federation::structs::tracker_address_book::TrackerAddressBook;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::peer_registry::PeerRegistry;

#[derive(Debug)]
pub struct FileTracker {
    pub config: Arc<Configuration>,
    pub registry: Arc<PeerRegistry>,
    pub address_book: Arc<TrackerAddressBook>,
    pub stats: Arc<StatsAtomics>,
}
