use std::time::Duration;

/// Sends the ping challenge over UDP and waits for the canonical reply.
#[derive(Debug, Clone)]
pub struct UdpPeerProbe {
    pub timeout: Duration,
    pub attempts: u32,
}
