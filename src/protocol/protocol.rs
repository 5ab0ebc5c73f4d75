use std::net::SocketAddr;
use crate::protocol::enums::protocol_error::ProtocolError;

/// Largest datagram either side reads.
pub const MAX_PACKET_SIZE: usize = 1024;

pub const INVALID_COMMAND: &str = "Invalid command";
pub const FILE_NOT_FOUND: &str = "File not found";
pub const SHARE_OK_PREFIX: &str = "File shared successfully: ";

/// Liveness challenge sent by a tracker to a peer's ping port.
pub const PING_CHALLENGE: &str = "Are you still alive?";
/// The only acceptable answer to [`PING_CHALLENGE`].
pub const PING_REPLY: &str = "yep , I am still alive.";

pub const HOLDER_SEPARATOR: &str = ", ";

pub fn format_holders(holders: &[SocketAddr]) -> String
{
    holders.iter()
        .map(|holder| holder.to_string())
        .collect::<Vec<String>>()
        .join(HOLDER_SEPARATOR)
}

/// Parses a `get` reply body into holder addresses.
///
/// Entries are separated by commas; surrounding whitespace is ignored. A single
/// malformed entry fails the whole list, since the reply is produced by one tracker.
pub fn parse_holders(body: &str) -> Result<Vec<SocketAddr>, ProtocolError>
{
    let mut holders = Vec::new();
    for entry in body.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let holder = entry.parse::<SocketAddr>().map_err(|_| ProtocolError::InvalidHolder(entry.to_string()))?;
        holders.push(holder);
    }
    if holders.is_empty() {
        return Err(ProtocolError::EmptyHolderList);
    }
    Ok(holders)
}

/// Decodes a datagram payload, trimming NUL padding and whitespace.
pub fn decode_datagram(payload: &[u8]) -> String
{
    String::from_utf8_lossy(payload)
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string()
}
