//! Discovery protocol codec.
//!
//! Peers talk to trackers with small whitespace-delimited UTF-8 datagrams.
//! This module turns those datagrams into typed requests and renders the
//! tracker's replies back into text.
//!
//! # Messages
//!
//! | Message | Fields |
//! |---|---|
//! | `share` | `<fileName> <trackerAddress> <listenPort> <serverPort> <pingPort>` |
//! | `get` | `<fileName>` |
//! | `ack` | `<fileName> <newServerPort> <success\|failure> <pingPort>` |
//!
//! Anything that does not parse is answered with [`protocol::INVALID_COMMAND`];
//! the codec never panics on garbled input.
//!
//! # Example
//!
//! ```rust
//! use filemesh::protocol::enums::request::Request;
//!
//! let request = Request::parse("get movie.mp4").unwrap();
//! assert_eq!(request.file_name(), "movie.mp4");
//! ```

/// Request, reply and error enumerations.
pub mod enums;

/// Implementation blocks for parsing and rendering messages.
pub mod impls;

/// Typed payloads of the three request verbs.
pub mod structs;

/// Canonical strings and holder-list helpers.
#[allow(clippy::module_inception)]
pub mod protocol;

/// Unit tests for the codec.
pub mod tests;
