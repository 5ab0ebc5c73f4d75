use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use crate::federation::enums::federation_error::FederationError;
use crate::federation::enums::federation_reply::FederationReply;
use crate::federation::federation::{read_line, write_line, TRACKER_ADDED_PREFIX, TRACKER_KNOWN_PREFIX};
use crate::federation::structs::federation_server::FederationServer;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::file_tracker::FileTracker;

impl FederationServer {
    /// Binds both listeners. When no advertised address is configured the
    /// lookup listener's own address is advertised instead.
    #[tracing::instrument(level = "debug", skip(tracker))]
    pub async fn new(tracker: Arc<FileTracker>, membership_bind: &str, lookup_bind: &str, max_connections: usize) -> tokio::io::Result<FederationServer>
    {
        let membership = TcpListener::bind(membership_bind).await?;
        let lookup = TcpListener::bind(lookup_bind).await?;

        if tracker.address_book.own_address().is_none() {
            let advertised = match tracker.config.federation.advertised_address.as_str() {
                "" => {
                    let local = lookup.local_addr()?;
                    let address = match local.ip() {
                        IpAddr::V4(ip) if ip.is_unspecified() => SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), local.port()),
                        IpAddr::V6(ip) if ip.is_unspecified() => SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), local.port()),
                        _ => local,
                    };
                    if local.ip().is_unspecified() {
                        warn!("[FEDERATION] No advertised_address configured, advertising {address}");
                    }
                    address.to_string()
                }
                configured => configured.to_string(),
            };
            tracker.address_book.set_own_address(advertised);
        }

        Ok(FederationServer {
            membership,
            lookup,
            tracker,
            connections: Arc::new(Semaphore::new(max_connections)),
        })
    }

    pub fn membership_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.membership.local_addr()
    }

    pub fn lookup_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.lookup.local_addr()
    }

    /// Moves both listeners into a single accept task.
    pub fn start(self, rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
    {
        tokio::spawn(FederationServer::accept_loop(self.membership, self.lookup, self.tracker, self.connections, rx))
    }

    async fn accept_loop(membership: TcpListener, lookup: TcpListener, tracker: Arc<FileTracker>, connections: Arc<Semaphore>, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let io_timeout = Duration::from_millis(tracker.config.federation.connect_timeout_ms);
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[FEDERATION] Stopping federation listeners...");
                    break;
                }
                accepted = membership.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            let tracker = tracker.clone();
                            let connections = connections.clone();
                            tokio::spawn(async move {
                                let Ok(_permit) = connections.acquire_owned().await else { return; };
                                if let Err(error) = FederationServer::handle_membership(stream, remote_addr, &tracker, io_timeout).await {
                                    debug!("[FEDERATION] Membership exchange with {remote_addr} failed: {error}");
                                }
                            });
                        }
                        Err(error) => warn!("[FEDERATION] Membership accept failed: {error}"),
                    }
                }
                accepted = lookup.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            let tracker = tracker.clone();
                            let connections = connections.clone();
                            tokio::spawn(async move {
                                let Ok(_permit) = connections.acquire_owned().await else { return; };
                                if let Err(error) = FederationServer::handle_lookup(stream, remote_addr, &tracker, io_timeout).await {
                                    debug!("[FEDERATION] Lookup exchange with {remote_addr} failed: {error}");
                                }
                            });
                        }
                        Err(error) => warn!("[FEDERATION] Lookup accept failed: {error}"),
                    }
                }
            }
        }
    }

    /// Remembers the announced lookup address and confirms it. Idempotent.
    pub async fn handle_membership(mut stream: TcpStream, remote_addr: SocketAddr, tracker: &FileTracker, io_timeout: Duration) -> Result<(), FederationError>
    {
        let peer = remote_addr.to_string();
        let (reader, mut writer) = stream.split();
        let address = read_line(reader, io_timeout, &peer).await?;
        if address.is_empty() {
            return Ok(());
        }
        let reply = if tracker.address_book.add(&address) {
            tracker.set_stats(StatsEvent::TrackersKnown, tracker.address_book.len() as i64);
            info!("[FEDERATION] Tracker added: {address} (from {remote_addr})");
            format!("{TRACKER_ADDED_PREFIX}{address}")
        } else {
            format!("{TRACKER_KNOWN_PREFIX}{address}")
        };
        write_line(&mut writer, &reply, io_timeout, &peer).await
    }

    /// Answers from the local registry only.
    pub async fn handle_lookup(mut stream: TcpStream, remote_addr: SocketAddr, tracker: &FileTracker, io_timeout: Duration) -> Result<(), FederationError>
    {
        let peer = remote_addr.to_string();
        let (reader, mut writer) = stream.split();
        let file_name = read_line(reader, io_timeout, &peer).await?;
        tracker.update_stats(StatsEvent::LookupsServed, 1);

        let holders = match file_name.is_empty() {
            true => Vec::new(),
            false => tracker.registry.find_holders(&file_name),
        };
        let reply = if holders.is_empty() {
            FederationReply::NotFound
        } else {
            let mut trackers: Vec<String> = tracker.address_book.own_address().into_iter().collect();
            trackers.extend(tracker.address_book.snapshot());
            FederationReply::Found { holders, trackers }
        };
        debug!("[FEDERATION] {remote_addr} looked up {file_name}: {reply}");
        write_line(&mut writer, &reply.to_string(), io_timeout, &peer).await
    }
}
