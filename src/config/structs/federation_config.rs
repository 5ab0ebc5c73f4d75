use serde::{Deserialize, Serialize};
use crate::config::structs::seed_tracker::SeedTracker;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FederationConfig {
    pub membership_bind_address: String,
    pub lookup_bind_address: String,
    /// Lookup address announced to other trackers. Empty means the bound lookup address.
    #[serde(default)]
    pub advertised_address: String,
    pub connect_timeout_ms: u64,
    pub max_connections: usize,
    /// Kept last so the TOML array of tables follows the plain values.
    #[serde(default)]
    pub seed_trackers: Vec<SeedTracker>,
}
