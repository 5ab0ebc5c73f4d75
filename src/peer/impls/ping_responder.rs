use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, info};
use tokio::net::UdpSocket;
use crate::peer::structs::ping_responder::PingResponder;
use crate::protocol::protocol::{decode_datagram, MAX_PACKET_SIZE, PING_CHALLENGE, PING_REPLY};

impl PingResponder {
    pub async fn bind(address: SocketAddr) -> tokio::io::Result<PingResponder>
    {
        let socket = UdpSocket::bind(address).await?;
        Ok(PingResponder { socket: Arc::new(socket) })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.socket.local_addr()
    }

    /// Answers the liveness challenge until `rx` fires; anything else is ignored.
    pub async fn start(&self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let mut buffer = [0u8; MAX_PACKET_SIZE];
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[PING] Stopping ping responder...");
                    break;
                }
                received = self.socket.recv_from(&mut buffer) => {
                    let Ok((size, from)) = received else { continue; };
                    if decode_datagram(&buffer[..size]) != PING_CHALLENGE {
                        debug!("[PING] Ignored {size} bytes from {from}");
                        continue;
                    }
                    if let Err(error) = self.socket.send_to(PING_REPLY.as_bytes(), from).await {
                        debug!("[PING] Could not answer {from}: {error}");
                    }
                }
            }
        }
    }
}
