use std::fmt;
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::enums::tracker_reply::TrackerReply;
use crate::protocol::protocol::{format_holders, parse_holders, FILE_NOT_FOUND};

impl TrackerReply {
    pub fn parse(body: &str) -> Result<TrackerReply, ProtocolError>
    {
        let body = body.trim();
        if body == FILE_NOT_FOUND {
            return Ok(TrackerReply::NotFound);
        }
        parse_holders(body).map(TrackerReply::Holders)
    }
}

impl fmt::Display for TrackerReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerReply::Holders(holders) => f.write_str(&format_holders(holders)),
            TrackerReply::NotFound => f.write_str(FILE_NOT_FOUND),
        }
    }
}
