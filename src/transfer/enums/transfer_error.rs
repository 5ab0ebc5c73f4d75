use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("holder refused the transfer: {0}")]
    Rejected(String),
    #[error("stream ended after {received} of {expected} bytes")]
    ShortTransfer { expected: u64, received: u64 },
    #[error("file name of {0} bytes does not fit the request frame")]
    NameTooLong(usize),
    #[error("file name {0:?} is not a plain file name")]
    UnsafeName(String),
    #[error("unknown reply status {0:#04x}")]
    InvalidStatus(u8),
    #[error("no progress for {0:?}")]
    Stalled(Duration),
    #[error("timed out connecting to {0}")]
    Timeout(SocketAddr),
}
