use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LivenessConfig {
    /// Seconds between two sweeps.
    pub interval: u64,
    pub probe_timeout_ms: u64,
    pub probe_attempts: u32,
    pub max_concurrent_probes: usize,
}
