use std::net::SocketAddr;
use log::{debug, info};
use crate::protocol::enums::request::Request;
use crate::protocol::protocol::{format_holders, FILE_NOT_FOUND, SHARE_OK_PREFIX};
use crate::protocol::structs::download_ack::DownloadAck;
use crate::protocol::structs::file_query::FileQuery;
use crate::protocol::structs::share_request::ShareRequest;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::tracker::structs::peer_key::PeerKey;

impl FileTracker {
    pub async fn handle_request(&self, remote_addr: SocketAddr, request: Request) -> String
    {
        match request {
            Request::Share(share) => self.handle_share(remote_addr, &share),
            Request::Get(query) => self.handle_get(remote_addr, &query).await,
            Request::Ack(ack) => self.handle_ack(remote_addr, &ack),
        }
    }

    pub fn handle_share(&self, remote_addr: SocketAddr, request: &ShareRequest) -> String
    {
        let key = PeerKey::new(remote_addr.ip(), request.server_port);
        self.registry.register(key, remote_addr.ip(), remote_addr.port(), request.server_port, request.ping_port, &request.file_name);
        self.set_stats(StatsEvent::Peers, self.registry.len() as i64);
        self.update_stats(StatsEvent::SharesHandled, 1);
        info!("[REGISTRY] {key} shared {}", request.file_name);
        format!("{SHARE_OK_PREFIX}{}", request.file_name)
    }

    /// Answers from the local registry, falling back to the federation when no
    /// local peer holds the file. The registry lock is released before any
    /// outbound connection is made.
    pub async fn handle_get(&self, remote_addr: SocketAddr, query: &FileQuery) -> String
    {
        self.update_stats(StatsEvent::QueriesHandled, 1);
        let holders = self.registry.find_holders(&query.file_name);
        if !holders.is_empty() {
            debug!("[REGISTRY] {remote_addr} asked for {}: {} local holders", query.file_name, holders.len());
            return format_holders(&holders);
        }

        match self.forward_lookup(&query.file_name).await {
            Some(remote_holders) => format_holders(&remote_holders),
            None => {
                debug!("[REGISTRY] {remote_addr} asked for {}: not found", query.file_name);
                FILE_NOT_FOUND.to_string()
            }
        }
    }

    pub fn handle_ack(&self, remote_addr: SocketAddr, ack: &DownloadAck) -> String
    {
        self.update_stats(StatsEvent::AcksHandled, 1);
        let key = PeerKey::new(remote_addr.ip(), ack.server_port);
        let success = ack.outcome.is_success();
        self.registry.acknowledge_download(key, remote_addr.ip(), remote_addr.port(), ack.server_port, ack.ping_port, &ack.file_name, success);
        self.set_stats(StatsEvent::Peers, self.registry.len() as i64);
        if success {
            format!("{key} successfully downloaded {}", ack.file_name)
        } else {
            format!("{key} couldn't download {}", ack.file_name)
        }
    }
}
