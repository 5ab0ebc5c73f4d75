use std::fmt;
use std::net::{IpAddr, SocketAddr};
use crate::tracker::structs::peer_key::PeerKey;

impl PeerKey {
    pub fn new(address: IpAddr, server_port: u16) -> PeerKey {
        PeerKey { address, server_port }
    }

    pub fn server_address(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.server_port)
    }
}

impl fmt::Display for PeerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.server_address())
    }
}
