use std::collections::BTreeSet;
use std::net::{IpAddr, SocketAddr};
use std::time::Instant;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::peer_record::PeerRecord;

impl PeerRecord {
    pub fn new(address: IpAddr, listen_port: u16, server_port: u16, ping_port: u16) -> PeerRecord {
        PeerRecord {
            address,
            listen_port,
            server_port,
            ping_port,
            last_seen: Instant::now(),
            shared_files: BTreeSet::new(),
        }
    }

    pub fn key(&self) -> PeerKey {
        PeerKey::new(self.address, self.server_port)
    }

    pub fn server_address(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.server_port)
    }

    pub fn ping_address(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.ping_port)
    }
}
