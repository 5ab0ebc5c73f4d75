use std::net::SocketAddr;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use tokio::net::UdpSocket;
use crate::config::structs::liveness_config::LivenessConfig;
use crate::liveness::structs::udp_peer_probe::UdpPeerProbe;
use crate::liveness::traits::peer_probe::PeerProbe;
use crate::protocol::protocol::{decode_datagram, MAX_PACKET_SIZE, PING_CHALLENGE, PING_REPLY};
use crate::tracker::structs::peer_record::PeerRecord;

impl UdpPeerProbe {
    pub fn new(timeout: Duration, attempts: u32) -> UdpPeerProbe
    {
        UdpPeerProbe { timeout, attempts: attempts.max(1) }
    }

    pub fn from_config(config: &LivenessConfig) -> UdpPeerProbe
    {
        UdpPeerProbe::new(Duration::from_millis(config.probe_timeout_ms), config.probe_attempts)
    }

    /// One challenge/response exchange. Any socket error or a wrong reply is a miss.
    pub async fn ping_once(&self, socket: &UdpSocket, target: SocketAddr) -> bool
    {
        if let Err(error) = socket.send_to(PING_CHALLENGE.as_bytes(), target).await {
            debug!("[PING] Sending challenge to {target} failed: {error}");
            return false;
        }
        let mut buffer = [0u8; MAX_PACKET_SIZE];
        let deadline = tokio::time::Instant::now() + self.timeout;
        loop {
            match tokio::time::timeout_at(deadline, socket.recv_from(&mut buffer)).await {
                Ok(Ok((size, from))) if from.ip() == target.ip() => {
                    return decode_datagram(&buffer[..size]) == PING_REPLY;
                }
                // Stray datagram from somewhere else, keep waiting.
                Ok(Ok(_)) => continue,
                Ok(Err(error)) => {
                    debug!("[PING] No reply from {target}: {error}");
                    return false;
                }
                Err(_) => return false,
            }
        }
    }
}

#[async_trait]
impl PeerProbe for UdpPeerProbe {
    async fn probe(&self, record: &PeerRecord) -> bool
    {
        let target = record.ping_address();
        let bind = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = match UdpSocket::bind(bind).await {
            Ok(socket) => socket,
            Err(error) => {
                debug!("[PING] Could not bind probe socket: {error}");
                return false;
            }
        };
        for attempt in 1..=self.attempts {
            if self.ping_once(&socket, target).await {
                return true;
            }
            debug!("[PING] {target} missed probe {attempt}/{}", self.attempts);
        }
        false
    }
}
