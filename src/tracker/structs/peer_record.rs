use std::collections::BTreeSet;
use std::net::IpAddr;
use std::time::Instant;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PeerRecord {
    /// Address observed on the datagram, never self-reported.
    pub address: IpAddr,
    pub listen_port: u16,
    pub server_port: u16,
    pub ping_port: u16,
    /// Refreshed by successful liveness probes only.
    pub last_seen: Instant,
    pub shared_files: BTreeSet<String>,
}
