pub mod liveness_monitor;
pub mod sweep_report;
pub mod udp_peer_probe;
