use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub peers: AtomicI64,
    pub shares_handled: AtomicI64,
    pub queries_handled: AtomicI64,
    pub acks_handled: AtomicI64,
    pub invalid_requests: AtomicI64,
    pub datagrams_dropped: AtomicI64,
    pub lookups_forwarded: AtomicI64,
    pub federation_hits: AtomicI64,
    pub lookups_served: AtomicI64,
    pub trackers_known: AtomicI64,
    pub probes_sent: AtomicI64,
    pub peers_evicted: AtomicI64,
}
