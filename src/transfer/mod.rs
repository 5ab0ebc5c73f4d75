//! Direct peer-to-peer file transfer over TCP.
//!
//! # Wire format
//!
//! ```text
//! request:  u16 BE name length | UTF-8 file name
//! reply:    0x00 | u64 BE length | <length> raw bytes
//!       or  0x01 | u16 BE length | UTF-8 error message
//! ```
//!
//! The sender streams the file in `buffer_size` chunks and flushes after each
//! one. The receiver reads exactly the announced length; a stream that ends
//! early is an error and the partial file is removed.

pub mod enums;
pub mod impls;
pub mod structs;
pub mod traits;

/// Framing helpers and the send/receive loops.
#[allow(clippy::module_inception)]
pub mod transfer;

pub mod tests;
