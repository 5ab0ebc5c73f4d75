use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub peers: i64,
    pub shares_handled: i64,
    pub queries_handled: i64,
    pub acks_handled: i64,
    pub invalid_requests: i64,
    pub datagrams_dropped: i64,
    pub lookups_forwarded: i64,
    pub federation_hits: i64,
    pub lookups_served: i64,
    pub trackers_known: i64,
    pub probes_sent: i64,
    pub peers_evicted: i64,
}
