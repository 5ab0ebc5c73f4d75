//! Peer data structures.

/// File name to local path table.
pub mod local_share_table;

/// Port to file name bindings for upload listeners.
pub mod port_bindings;

/// A running upload listener.
pub mod serve_listener;

/// Result of starting (or reusing) an upload listener.
pub mod serve_port;

/// Listener owner and upload worker pool.
pub mod upload_service;

/// Progress view of one running upload.
pub mod upload_snapshot;

/// UDP answerer for liveness probes.
pub mod ping_responder;

/// UDP client for the tracker protocol.
pub mod tracker_client;

/// Serialized download workflow.
pub mod download_orchestrator;

/// Summary of a finished download.
pub mod download_report;

/// Summary of a finished share.
pub mod share_report;

/// A complete peer process.
pub mod peer_node;
