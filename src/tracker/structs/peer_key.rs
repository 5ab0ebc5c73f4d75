use std::net::IpAddr;

/// A peer can appear once per file-serving port, so the port is part of the identity.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerKey {
    pub address: IpAddr,
    pub server_port: u16,
}
