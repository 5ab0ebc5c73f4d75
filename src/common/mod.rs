//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup
//! - Interruptible sleeping for periodic loops
//! - Peer-facing address resolution

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Unit tests for shared helpers.
pub mod tests;
