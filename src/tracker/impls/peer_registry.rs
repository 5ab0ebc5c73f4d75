use std::net::{IpAddr, SocketAddr};
use std::time::Instant;
use log::{debug, info};
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::peer_registry::PeerRegistry;

impl PeerRegistry {
    pub fn new() -> PeerRegistry {
        PeerRegistry::default()
    }

    /// Upserts the record for `key` and adds `file_name` to its shared files.
    ///
    /// Ports of an existing record are left untouched; duplicates of the same
    /// datagram leave the registry unchanged.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn register(&self, key: PeerKey, address: IpAddr, listen_port: u16, server_port: u16, ping_port: u16, file_name: &str) -> PeerRecord
    {
        let mut peers = self.peers.write();
        let record = peers.entry(key)
            .or_insert_with(|| PeerRecord::new(address, listen_port, server_port, ping_port));
        if record.shared_files.insert(file_name.to_string()) {
            debug!("[REGISTRY] {key} now shares {file_name}");
        }
        record.clone()
    }

    /// Records the outcome of a download. A successful downloader becomes a holder
    /// of the file; a failed one is only logged.
    #[allow(clippy::too_many_arguments)]
    pub fn acknowledge_download(&self, key: PeerKey, address: IpAddr, listen_port: u16, server_port: u16, ping_port: u16, file_name: &str, success: bool) -> Option<PeerRecord>
    {
        if success {
            info!("[REGISTRY] {key} successfully downloaded {file_name}");
            Some(self.register(key, address, listen_port, server_port, ping_port, file_name))
        } else {
            info!("[REGISTRY] {key} couldn't download {file_name}");
            None
        }
    }

    pub fn find_holders(&self, file_name: &str) -> Vec<SocketAddr>
    {
        self.peers.read()
            .values()
            .filter(|record| record.shared_files.contains(file_name))
            .map(|record| record.server_address())
            .collect()
    }

    pub fn evict(&self, key: &PeerKey) -> Option<PeerRecord>
    {
        self.peers.write().remove(key)
    }

    /// Applies the result of one liveness sweep under a single write lock:
    /// `alive` records get their `last_seen` refreshed, `dead` ones are removed.
    pub fn apply_sweep(&self, alive: &[PeerKey], dead: &[PeerKey], seen_at: Instant) -> Vec<PeerRecord>
    {
        let mut peers = self.peers.write();
        for key in alive {
            if let Some(record) = peers.get_mut(key) {
                record.last_seen = seen_at;
            }
        }
        dead.iter().filter_map(|key| peers.remove(key)).collect()
    }

    pub fn snapshot(&self) -> Vec<PeerRecord>
    {
        self.peers.read().values().cloned().collect()
    }

    pub fn get(&self, key: &PeerKey) -> Option<PeerRecord>
    {
        self.peers.read().get(key).cloned()
    }

    pub fn len(&self) -> usize
    {
        self.peers.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.peers.read().is_empty()
    }
}
