//! # filemesh
//!
//! Peer-to-peer file sharing with federated UDP trackers.
//!
//! ## Overview
//!
//! Peers register the files they hold with a tracker over a small text protocol
//! on UDP. Other peers ask a tracker who holds a file and then pull the bytes
//! straight from one of the holders over TCP; a tracker never sees file content.
//! After a successful download the new copy is served on its own port and the
//! tracker is told, so every downloader becomes a holder.
//!
//! Trackers probe their peers periodically and forget the ones that stop
//! answering. A tracker that cannot answer a lookup from its own registry asks
//! the other trackers it knows.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use filemesh::config::structs::configuration::Configuration;
//! use filemesh::tracker::structs::file_tracker::FileTracker;
//! use filemesh::udp::udp::udp_service;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let tracker = Arc::new(FileTracker::new(config));
//! let (_tx, rx) = tokio::sync::watch::channel(false);
//! let (address, handle) = udp_service(tracker, rx).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared async helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`federation`] - Tracker-to-tracker membership and lookup forwarding
//! - [`liveness`] - Periodic probing and eviction of silent peers
//! - [`peer`] - Upload listeners, ping responder and the download workflow
//! - [`protocol`] - The UDP text protocol between peers and trackers
//! - [`stats`] - Tracker counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Peer registry and request handlers
//! - [`transfer`] - Byte-exact file streaming between peers
//! - [`udp`] - The tracker's UDP endpoint

/// Logging setup and shared async helpers.
pub mod common;

/// Configuration management.
pub mod config;

/// Tracker federation.
pub mod federation;

/// Peer liveness sweeps.
pub mod liveness;

/// Peer side: uploads, downloads and the ping responder.
pub mod peer;

/// Peer/tracker control protocol.
pub mod protocol;

/// Tracker statistics.
pub mod stats;

/// CLI structures.
pub mod structs;

/// Peer registry and tracker handlers.
pub mod tracker;

/// Peer-to-peer file transfer channel.
pub mod transfer;

/// UDP tracker endpoint.
pub mod udp;
