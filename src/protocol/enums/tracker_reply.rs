use std::net::SocketAddr;

/// A tracker's answer to a `get` query, as seen by the peer.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum TrackerReply {
    Holders(Vec<SocketAddr>),
    NotFound,
}
