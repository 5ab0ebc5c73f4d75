//! Federation data structures.

/// Known peer-tracker lookup addresses.
pub mod tracker_address_book;

/// Membership and lookup TCP listeners.
pub mod federation_server;
