use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TrackerClient {
    pub share_timeout: Duration,
    /// `None` waits for a `get` reply forever.
    pub query_timeout: Option<Duration>,
}
