use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::task::JoinHandle;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::udp::structs::udp_server::UdpServer;

/// Binds the tracker socket from `[tracker]` and spawns the receive loop.
pub async fn udp_service(tracker: Arc<FileTracker>, rx: tokio::sync::watch::Receiver<bool>) -> tokio::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let config = tracker.config.tracker.clone();
    let bind_address: SocketAddr = config.udp_bind_address.parse().map_err(tokio::io::Error::other)?;
    let udp_server = UdpServer::new(tracker, bind_address, config.udp_workers, config.recv_buffer_size, config.send_buffer_size, config.reuse_address).await?;
    let local_addr = udp_server.local_addr()?;
    info!("[UDP] Starting a server listener on {local_addr} with {} workers", config.udp_workers);
    let handle = tokio::spawn(async move {
        udp_server.start(rx).await;
    });
    Ok((local_addr, handle))
}
