#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ShareRequest {
    pub file_name: String,
    /// Tracker address as typed by the user; informational only.
    pub tracker_address: String,
    pub listen_port: u16,
    pub server_port: u16,
    pub ping_port: u16,
}
