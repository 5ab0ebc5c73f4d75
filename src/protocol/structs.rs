//! Typed request payloads.

/// `share` payload.
pub mod share_request;

/// `get` payload.
pub mod file_query;

/// `ack` payload.
pub mod download_ack;
