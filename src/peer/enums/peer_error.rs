use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::transfer::enums::transfer_error::TransferError;

#[derive(Error, Debug)]
pub enum PeerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),
    #[error("unexpected tracker reply: {0}")]
    Protocol(#[from] ProtocolError),
    #[error("tracker {0} did not answer in time")]
    TrackerTimeout(SocketAddr),
    #[error("tracker refused the share: {0}")]
    ShareRejected(String),
    #[error("{0} is not a readable file")]
    NotAFile(PathBuf),
    #[error("{file_name} is already shared from {}", existing.display())]
    NameConflict { file_name: String, existing: PathBuf },
    #[error("already serving {0} files, the listener limit")]
    ListenerLimit(usize),
    #[error("upload refused: {0}")]
    UploadRefused(String),
}
