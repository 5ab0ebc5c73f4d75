//! UDP tracker endpoint.
//!
//! Every datagram holds one textual request (`share`, `get` or `ack`) and gets
//! exactly one textual reply, sent back to the datagram's source address.
//!
//! # Concurrency
//!
//! The receive loop never blocks on request handling: each datagram is handed
//! to its own task, bounded by a semaphore of `tracker.udp_workers` permits.
//! When every permit is taken the datagram is dropped and counted, so a slow
//! federation lookup cannot stall unrelated requests.
//!
//! Malformed requests are answered with `Invalid command` and never crash the
//! loop.

/// Implementation blocks for the UDP server.
pub mod impls;

/// The UDP server structure.
pub mod structs;

/// Service entry point.
#[allow(clippy::module_inception)]
pub mod udp;

/// Unit tests for datagram handling.
pub mod tests;
