use std::net::SocketAddr;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum FederationReply {
    Found {
        holders: Vec<SocketAddr>,
        /// Lookup addresses known to the answering tracker, itself included.
        trackers: Vec<String>,
    },
    NotFound,
}
