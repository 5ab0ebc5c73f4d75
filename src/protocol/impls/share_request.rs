use std::fmt;
use crate::protocol::structs::share_request::ShareRequest;

impl fmt::Display for ShareRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "share {} {} {} {} {}", self.file_name, self.tracker_address, self.listen_port, self.server_port, self.ping_port)
    }
}
