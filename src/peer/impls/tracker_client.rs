use std::net::SocketAddr;
use std::time::Duration;
use log::{debug, warn};
use tokio::net::UdpSocket;
use crate::config::structs::peer_config::PeerConfig;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::protocol::enums::tracker_reply::TrackerReply;
use crate::protocol::protocol::{decode_datagram, MAX_PACKET_SIZE};
use crate::protocol::structs::download_ack::DownloadAck;
use crate::protocol::structs::file_query::FileQuery;
use crate::protocol::structs::share_request::ShareRequest;

impl TrackerClient {
    pub fn from_config(config: &PeerConfig) -> TrackerClient
    {
        TrackerClient {
            share_timeout: Duration::from_millis(config.tracker_timeout_ms),
            query_timeout: match config.query_timeout_ms {
                0 => None,
                millis => Some(Duration::from_millis(millis)),
            },
        }
    }

    async fn socket_for(tracker: SocketAddr) -> Result<UdpSocket, PeerError>
    {
        let bind = if tracker.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        Ok(UdpSocket::bind(bind).await?)
    }

    async fn exchange(socket: &UdpSocket, tracker: SocketAddr, message: &str, timeout: Option<Duration>) -> Result<String, PeerError>
    {
        socket.send_to(message.as_bytes(), tracker).await?;
        let mut buffer = [0u8; MAX_PACKET_SIZE];
        let received = match timeout {
            Some(timeout) => tokio::time::timeout(timeout, socket.recv_from(&mut buffer)).await
                .map_err(|_| PeerError::TrackerTimeout(tracker))??,
            None => socket.recv_from(&mut buffer).await?,
        };
        let reply = decode_datagram(&buffer[..received.0]);
        debug!("[DOWNLOAD] {tracker} answered {message:?} with {reply:?}");
        Ok(reply)
    }

    /// Registers `file_name` as served on `server_port` and returns the tracker's reply.
    pub async fn share(&self, tracker: SocketAddr, file_name: &str, server_port: u16, ping_port: u16) -> Result<String, PeerError>
    {
        let socket = TrackerClient::socket_for(tracker).await?;
        let request = ShareRequest {
            file_name: file_name.to_string(),
            tracker_address: tracker.ip().to_string(),
            listen_port: socket.local_addr()?.port(),
            server_port,
            ping_port,
        };
        TrackerClient::exchange(&socket, tracker, &request.to_string(), Some(self.share_timeout)).await
    }

    pub async fn query(&self, tracker: SocketAddr, file_name: &str) -> Result<TrackerReply, PeerError>
    {
        let socket = TrackerClient::socket_for(tracker).await?;
        let query = FileQuery { file_name: file_name.to_string() };
        let reply = TrackerClient::exchange(&socket, tracker, &query.to_string(), self.query_timeout).await?;
        Ok(TrackerReply::parse(&reply)?)
    }

    /// Sends the acknowledgement once; the confirmation is not awaited.
    pub async fn acknowledge(&self, tracker: SocketAddr, ack: &DownloadAck)
    {
        let sent = async {
            let socket = TrackerClient::socket_for(tracker).await?;
            socket.send_to(ack.to_string().as_bytes(), tracker).await?;
            Ok::<(), PeerError>(())
        }.await;
        if let Err(error) = sent {
            warn!("[DOWNLOAD] Could not acknowledge {} to {tracker}: {error}", ack.file_name);
        }
    }
}
