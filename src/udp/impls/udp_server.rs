use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use crate::protocol::enums::request::Request;
use crate::protocol::protocol::{INVALID_COMMAND, MAX_PACKET_SIZE};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::udp::structs::udp_server::UdpServer;

impl UdpServer {
    #[tracing::instrument(level = "debug", skip(tracker))]
    pub async fn new(tracker: Arc<FileTracker>, bind_address: SocketAddr, workers: usize, recv_buffer_size: usize, send_buffer_size: usize, reuse_address: bool) -> tokio::io::Result<UdpServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        socket.set_recv_buffer_size(recv_buffer_size).map_err(tokio::io::Error::other)?;
        socket.set_send_buffer_size(send_buffer_size).map_err(tokio::io::Error::other)?;
        socket.set_reuse_address(reuse_address).map_err(tokio::io::Error::other)?;
        socket.bind(&bind_address.into()).map_err(tokio::io::Error::other)?;
        socket.set_nonblocking(true).map_err(tokio::io::Error::other)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        let sock_ref = socket2::SockRef::from(&tokio_socket);
        let actual_recv = sock_ref.recv_buffer_size().unwrap_or(0);
        let actual_send = sock_ref.send_buffer_size().unwrap_or(0);
        debug!("[UDP] Socket created with buffers - Recv: {actual_recv} bytes, Send: {actual_send} bytes");

        Ok(UdpServer {
            socket: Arc::new(tokio_socket),
            tracker,
            workers: Arc::new(Semaphore::new(workers.max(1))),
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.socket.local_addr()
    }

    #[tracing::instrument(level = "debug")]
    pub async fn start(&self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let mut data = [0u8; MAX_PACKET_SIZE];
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[UDP] Stopping UDP server on {:?}...", self.socket.local_addr());
                    break;
                }
                result = self.socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            let Ok(permit) = self.workers.clone().try_acquire_owned() else {
                                self.tracker.update_stats(StatsEvent::DatagramsDropped, 1);
                                warn!("[UDP] All workers busy, dropped datagram from {remote_addr}");
                                continue;
                            };
                            let payload = data[..valid_bytes].to_vec();
                            let tracker = self.tracker.clone();
                            let socket = self.socket.clone();
                            tokio::spawn(async move {
                                let response = UdpServer::handle_packet(remote_addr, payload, tracker).await;
                                UdpServer::send_response(socket, remote_addr, response).await;
                                drop(permit);
                            });
                        }
                        Err(error) if error.kind() == std::io::ErrorKind::WouldBlock => {
                            tokio::task::yield_now().await;
                        }
                        Err(error) => {
                            // Windows reports ICMP port unreachable from earlier sends here.
                            debug!("[UDP] recv_from error: {error}");
                        }
                    }
                }
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(tracker))]
    pub async fn handle_packet(remote_addr: SocketAddr, payload: Vec<u8>, tracker: Arc<FileTracker>) -> String
    {
        match Request::from_bytes(&payload) {
            Ok(request) => {
                debug!("[UDP] {remote_addr} -> {request}");
                tracker.handle_request(remote_addr, request).await
            }
            Err(error) => {
                tracker.update_stats(StatsEvent::InvalidRequests, 1);
                debug!("[UDP] Invalid request from {remote_addr}: {error}");
                INVALID_COMMAND.to_string()
            }
        }
    }

    pub async fn send_response(socket: Arc<UdpSocket>, remote_addr: SocketAddr, response: String)
    {
        debug!("[UDP] {remote_addr} <- {response}");
        if let Err(error) = socket.send_to(response.as_bytes(), remote_addr).await {
            error!("[UDP] Could not reply to {remote_addr}: {error}");
        }
    }
}
