//! Data structures for the tracker.

/// Identity of a registered peer endpoint.
pub mod peer_key;

/// Everything the tracker knows about one peer endpoint.
pub mod peer_record;

/// Lock-guarded map of peer records.
pub mod peer_registry;

/// Main tracker instance.
pub mod file_tracker;
