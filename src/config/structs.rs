//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Tracker UDP server settings.
pub mod tracker_config;

/// Liveness sweep settings.
pub mod liveness_config;

/// Tracker federation settings.
pub mod federation_config;

/// A tracker to join at start-up.
pub mod seed_tracker;

/// Peer settings.
pub mod peer_config;
