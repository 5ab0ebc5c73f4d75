use std::net::SocketAddr;
use std::time::Duration;
use log::{debug, info, warn};
use tokio::net::TcpStream;
use crate::config::structs::seed_tracker::SeedTracker;
use crate::federation::enums::federation_error::FederationError;
use crate::federation::enums::federation_reply::FederationReply;
use crate::federation::federation::{read_line, write_line, TRACKER_ADDED_PREFIX, TRACKER_KNOWN_PREFIX};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::file_tracker::FileTracker;

impl FileTracker {
    fn federation_timeout(&self) -> Duration
    {
        Duration::from_millis(self.config.federation.connect_timeout_ms)
    }

    async fn connect(&self, address: &str) -> Result<TcpStream, FederationError>
    {
        tokio::time::timeout(self.federation_timeout(), TcpStream::connect(address)).await
            .map_err(|_| FederationError::Timeout(address.to_string()))?
            .map_err(FederationError::from)
    }

    /// Asks every known tracker, in insertion order, until one has holders.
    /// Trackers revealed by a positive answer are merged into the address book.
    pub async fn forward_lookup(&self, file_name: &str) -> Option<Vec<SocketAddr>>
    {
        let trackers = self.address_book.snapshot();
        if trackers.is_empty() {
            return None;
        }
        self.update_stats(StatsEvent::LookupsForwarded, 1);

        for address in trackers {
            match self.query_tracker(&address, file_name).await {
                Ok(FederationReply::Found { holders, trackers }) => {
                    let learned = self.address_book.merge(trackers);
                    if learned > 0 {
                        info!("[FEDERATION] Learned {learned} new trackers from {address}");
                        self.set_stats(StatsEvent::TrackersKnown, self.address_book.len() as i64);
                    }
                    self.update_stats(StatsEvent::FederationHits, 1);
                    debug!("[FEDERATION] {address} holds {file_name} via {} peers", holders.len());
                    return Some(holders);
                }
                Ok(FederationReply::NotFound) => {
                    debug!("[FEDERATION] {address} does not know {file_name}");
                }
                Err(error) => {
                    warn!("[FEDERATION] Tracker {address} unreachable: {error}");
                }
            }
        }
        None
    }

    pub async fn query_tracker(&self, address: &str, file_name: &str) -> Result<FederationReply, FederationError>
    {
        let io_timeout = self.federation_timeout();
        let mut stream = self.connect(address).await?;
        let (reader, mut writer) = stream.split();
        write_line(&mut writer, file_name, io_timeout, address).await?;
        let line = read_line(reader, io_timeout, address).await?;
        Ok(FederationReply::parse(&line)?)
    }

    /// Announces this tracker to `seed` and, once accepted, remembers the
    /// seed's lookup address.
    pub async fn join_federation(&self, seed: &SeedTracker) -> Result<String, FederationError>
    {
        let own_address = self.address_book.own_address().ok_or(FederationError::NoAdvertisedAddress)?;
        let io_timeout = self.federation_timeout();
        let mut stream = self.connect(&seed.membership_address).await?;
        let (reader, mut writer) = stream.split();
        write_line(&mut writer, &own_address, io_timeout, &seed.membership_address).await?;
        let reply = read_line(reader, io_timeout, &seed.membership_address).await?;

        if !reply.starts_with(TRACKER_ADDED_PREFIX) && !reply.starts_with(TRACKER_KNOWN_PREFIX) {
            return Err(FederationError::Refused { address: seed.membership_address.clone(), reply });
        }
        if self.address_book.add(&seed.lookup_address) {
            self.set_stats(StatsEvent::TrackersKnown, self.address_book.len() as i64);
        }
        Ok(reply)
    }
}
