//! Peer side of the network.
//!
//! A peer serves files it holds and downloads files it lacks:
//!
//! - [`structs::local_share_table::LocalShareTable`] maps file names to local
//!   paths. Entries are never removed while the process lives.
//! - [`structs::upload_service::UploadService`] owns one TCP listener per
//!   served file. A [`structs::port_bindings::PortBindings`] table records which
//!   file each port may serve; a request for any other file on that port is
//!   refused. Uploads run on a bounded worker pool.
//! - [`structs::ping_responder::PingResponder`] answers tracker liveness probes.
//! - [`structs::download_orchestrator::DownloadOrchestrator`] runs the
//!   query, select, transfer, re-share, acknowledge sequence, one download at a
//!   time.
//! - [`structs::peer_node::PeerNode`] ties these together behind `share` and `get`.

pub mod enums;
pub mod impls;
pub mod structs;

/// Interactive command parsing.
#[allow(clippy::module_inception)]
pub mod peer;
