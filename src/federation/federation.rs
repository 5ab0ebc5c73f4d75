use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::task::JoinHandle;
use crate::federation::enums::federation_error::FederationError;
use crate::federation::structs::federation_server::FederationServer;
use crate::tracker::structs::file_tracker::FileTracker;

/// Separates local holders from the answering tracker's known trackers.
pub const TRACKERS_MARKER: &str = " | trackers ";
pub const TRACKER_ADDED_PREFIX: &str = "Tracker added: ";
pub const TRACKER_KNOWN_PREFIX: &str = "Tracker already known: ";
/// Longest line accepted on either federation listener.
pub const MAX_LINE_LENGTH: u64 = 4096;

/// Binds both federation listeners and runs them until `rx` fires.
pub async fn federation_service(tracker: Arc<FileTracker>, rx: tokio::sync::watch::Receiver<bool>) -> Result<JoinHandle<()>, FederationError>
{
    let config = tracker.config.federation.clone();
    let server = FederationServer::new(
        tracker.clone(),
        &config.membership_bind_address,
        &config.lookup_bind_address,
        config.max_connections,
    ).await?;
    info!("[FEDERATION] Membership listener on {}, lookup listener on {}", server.membership_addr()?, server.lookup_addr()?);
    Ok(server.start(rx))
}

/// Joins every configured seed tracker. Failures are logged and skipped.
pub async fn join_seed_trackers(tracker: Arc<FileTracker>)
{
    for seed in tracker.config.federation.seed_trackers.clone() {
        match tracker.join_federation(&seed).await {
            Ok(reply) => info!("[FEDERATION] Joined {}: {reply}", seed.membership_address),
            Err(FederationError::NoAdvertisedAddress) => {
                error!("[FEDERATION] Cannot join {}: no advertised address", seed.membership_address);
                return;
            }
            Err(error) => warn!("[FEDERATION] Could not join {}: {error}", seed.membership_address),
        }
    }
}

/// Reads one `\n`-terminated line, bounded by [`MAX_LINE_LENGTH`] and `io_timeout`.
pub async fn read_line<R>(reader: R, io_timeout: Duration, peer: &str) -> Result<String, FederationError>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader.take(MAX_LINE_LENGTH));
    let mut line = String::new();
    let read = tokio::time::timeout(io_timeout, reader.read_line(&mut line)).await
        .map_err(|_| FederationError::Timeout(peer.to_string()))??;
    if read == 0 {
        return Err(FederationError::NoReply(peer.to_string()));
    }
    Ok(line.trim().to_string())
}

pub async fn write_line<W>(writer: &mut W, line: &str, io_timeout: Duration, peer: &str) -> Result<(), FederationError>
where
    W: AsyncWrite + Unpin,
{
    let framed = format!("{line}\n");
    tokio::time::timeout(io_timeout, async {
        writer.write_all(framed.as_bytes()).await?;
        writer.flush().await
    }).await.map_err(|_| FederationError::Timeout(peer.to_string()))??;
    Ok(())
}
