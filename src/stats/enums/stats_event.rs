//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Every counter the tracker keeps. Used with `FileTracker::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Peers,
    SharesHandled,
    QueriesHandled,
    AcksHandled,
    InvalidRequests,
    DatagramsDropped,
    LookupsForwarded,
    FederationHits,
    LookupsServed,
    TrackersKnown,
    ProbesSent,
    PeersEvicted,
}
