use std::fmt;
use crate::federation::enums::federation_reply::FederationReply;
use crate::federation::federation::TRACKERS_MARKER;
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::protocol::{format_holders, parse_holders, FILE_NOT_FOUND};

impl FederationReply {
    pub fn parse(line: &str) -> Result<FederationReply, ProtocolError>
    {
        let line = line.trim();
        if line == FILE_NOT_FOUND {
            return Ok(FederationReply::NotFound);
        }
        let (holders, trackers) = match line.split_once(TRACKERS_MARKER) {
            Some((holders, trackers)) => (holders, trackers),
            None => (line, ""),
        };
        Ok(FederationReply::Found {
            holders: parse_holders(holders)?,
            trackers: trackers.split(',')
                .map(str::trim)
                .filter(|tracker| !tracker.is_empty())
                .map(String::from)
                .collect(),
        })
    }
}

impl fmt::Display for FederationReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FederationReply::Found { holders, trackers } if trackers.is_empty() => {
                f.write_str(&format_holders(holders))
            }
            FederationReply::Found { holders, trackers } => {
                write!(f, "{}{TRACKERS_MARKER}{}", format_holders(holders), trackers.join(", "))
            }
            FederationReply::NotFound => f.write_str(FILE_NOT_FOUND),
        }
    }
}
