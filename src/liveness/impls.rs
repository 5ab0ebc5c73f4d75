pub mod liveness_monitor;
pub mod udp_peer_probe;
