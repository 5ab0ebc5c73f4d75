use crate::protocol::enums::ack_outcome::AckOutcome;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DownloadAck {
    pub file_name: String,
    /// Port the downloader now serves the file on (meaningless on failure).
    pub server_port: u16,
    pub outcome: AckOutcome,
    pub ping_port: u16,
}
