//! Tracker statistics.
//!
//! Atomic counters for everything the tracker does, updated from the UDP
//! handlers, the federation listeners and the liveness sweep without taking
//! any lock. The tracker binary logs a snapshot every `log_console_interval`
//! seconds.
//!
//! # Example
//!
//! ```rust,ignore
//! use filemesh::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::SharesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
