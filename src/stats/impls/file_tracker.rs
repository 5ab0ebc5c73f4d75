use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::file_tracker::FileTracker;

impl FileTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            peers: self.stats.peers.load(Ordering::SeqCst),
            shares_handled: self.stats.shares_handled.load(Ordering::SeqCst),
            queries_handled: self.stats.queries_handled.load(Ordering::SeqCst),
            acks_handled: self.stats.acks_handled.load(Ordering::SeqCst),
            invalid_requests: self.stats.invalid_requests.load(Ordering::SeqCst),
            datagrams_dropped: self.stats.datagrams_dropped.load(Ordering::SeqCst),
            lookups_forwarded: self.stats.lookups_forwarded.load(Ordering::SeqCst),
            federation_hits: self.stats.federation_hits.load(Ordering::SeqCst),
            lookups_served: self.stats.lookups_served.load(Ordering::SeqCst),
            trackers_known: self.stats.trackers_known.load(Ordering::SeqCst),
            probes_sent: self.stats.probes_sent.load(Ordering::SeqCst),
            peers_evicted: self.stats.peers_evicted.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Peers => &self.stats.peers,
            StatsEvent::SharesHandled => &self.stats.shares_handled,
            StatsEvent::QueriesHandled => &self.stats.queries_handled,
            StatsEvent::AcksHandled => &self.stats.acks_handled,
            StatsEvent::InvalidRequests => &self.stats.invalid_requests,
            StatsEvent::DatagramsDropped => &self.stats.datagrams_dropped,
            StatsEvent::LookupsForwarded => &self.stats.lookups_forwarded,
            StatsEvent::FederationHits => &self.stats.federation_hits,
            StatsEvent::LookupsServed => &self.stats.lookups_served,
            StatsEvent::TrackersKnown => &self.stats.trackers_known,
            StatsEvent::ProbesSent => &self.stats.probes_sent,
            StatsEvent::PeersEvicted => &self.stats.peers_evicted,
        }
    }
}
