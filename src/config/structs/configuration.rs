use serde::{Deserialize, Serialize};
use crate::config::structs::federation_config::FederationConfig;
use crate::config::structs::liveness_config::LivenessConfig;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker: TrackerConfig,
    pub liveness: LivenessConfig,
    pub federation: FederationConfig,
    pub peer: PeerConfig,
}
