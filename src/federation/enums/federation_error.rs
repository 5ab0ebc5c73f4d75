use thiserror::Error;
use crate::protocol::enums::protocol_error::ProtocolError;

#[derive(Error, Debug)]
pub enum FederationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("timed out talking to {0}")]
    Timeout(String),
    #[error("{0} closed the connection without replying")]
    NoReply(String),
    #[error("malformed reply: {0}")]
    Malformed(#[from] ProtocolError),
    #[error("membership refused by {address}: {reply}")]
    Refused { address: String, reply: String },
    #[error("no advertised lookup address is known yet")]
    NoAdvertisedAddress,
}
