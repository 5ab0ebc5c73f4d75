use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    pub udp_bind_address: String,
    /// Upper bound on datagrams being handled at once.
    pub udp_workers: usize,
    pub recv_buffer_size: usize,
    pub send_buffer_size: usize,
    pub reuse_address: bool,
}
