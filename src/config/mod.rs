//! Configuration management module.
//!
//! Loads, validates and writes the TOML configuration shared by the tracker
//! and the peer binaries.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **tracker**: UDP front end of the tracker
//! - **liveness**: sweep interval and probe budget
//! - **federation**: tracker-to-tracker listeners and seed trackers
//! - **peer**: upload pool, ping port, download directory and timeouts
//!
//! # Example
//!
//! ```rust,ignore
//! use filemesh::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
