use std::fmt;
use crate::protocol::structs::download_ack::DownloadAck;

impl fmt::Display for DownloadAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ack {} {} {} {}", self.file_name, self.server_port, self.outcome, self.ping_port)
    }
}
