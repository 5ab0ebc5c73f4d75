//! Tracker core: the peer registry and the request handlers built on it.
//!
//! # Architecture
//!
//! - `PeerRegistry` maps a `PeerKey` (observed address + advertised server port)
//!   to a `PeerRecord` holding ports, liveness timestamp and shared file names.
//!   One `parking_lot::RwLock` guards the whole map, so a lookup never sees a
//!   registry halfway through a liveness eviction.
//! - `FileTracker` owns the registry, the federation address book and the
//!   statistics counters, and is handed by `Arc` to every service.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use filemesh::config::structs::configuration::Configuration;
//! use filemesh::tracker::structs::file_tracker::FileTracker;
//!
//! let tracker = Arc::new(FileTracker::new(Arc::new(Configuration::init())));
//! let holders = tracker.registry.find_holders("movie.mp4");
//! ```

/// Implementation blocks for the registry and the tracker handlers.
pub mod impls;

/// Registry keys, records and the tracker instance.
pub mod structs;

/// Unit tests for the registry.
pub mod tests;
