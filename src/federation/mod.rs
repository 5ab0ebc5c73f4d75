//! Tracker federation.
//!
//! Trackers that cannot answer a lookup from their own registry ask the other
//! trackers they know about. Two small line-based TCP protocols are involved:
//!
//! - **Membership**: a joining tracker sends its advertised lookup address on
//!   one line; the acceptor remembers it and confirms with one line.
//! - **Lookup**: a forwarding tracker sends a file name on one line; the
//!   answering tracker replies with one line holding its LOCAL holders (it never
//!   forwards again, so federation cycles cannot loop) or `File not found`.
//!   Positive replies carry ` | trackers a, b` so the asker can learn trackers
//!   it did not know about yet.
//!
//! Unreachable trackers count as "no answer"; forwarding moves on to the next.

/// Reply and error enumerations.
pub mod enums;

/// Implementation blocks for the address book, the listeners and forwarding.
pub mod impls;

/// Address book and listener structures.
pub mod structs;

/// Service entry points and protocol constants.
#[allow(clippy::module_inception)]
pub mod federation;
