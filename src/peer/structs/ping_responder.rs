use std::sync::Arc;
use tokio::net::UdpSocket;

#[derive(Debug)]
pub struct PingResponder {
    pub(crate) socket: Arc<UdpSocket>,
}
