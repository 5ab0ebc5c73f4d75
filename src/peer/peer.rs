use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use log::info;
use tokio::task::JoinHandle;
use crate::common::common::resolve_address;
use crate::peer::enums::download_outcome::DownloadOutcome;
use crate::peer::enums::peer_command::PeerCommand;
use crate::peer::structs::peer_node::PeerNode;
use crate::peer::structs::ping_responder::PingResponder;

pub const PEER_USAGE: &str = "commands: share <path> <trackerAddress> <port> | get <fileName> <trackerAddress> <port> | status | quit";

/// Binds the ping responder and spawns it.
pub async fn ping_service(address: SocketAddr, rx: tokio::sync::watch::Receiver<bool>) -> tokio::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let responder = PingResponder::bind(address).await?;
    let local_addr = responder.local_addr()?;
    info!("[PING] Answering liveness probes on {local_addr}");
    let handle = tokio::spawn(async move {
        responder.start(rx).await;
    });
    Ok((local_addr, handle))
}

/// Runs one prompt command and renders the line shown to the user.
pub async fn run_command(node: Arc<PeerNode>, command: PeerCommand) -> String
{
    let default_port = node.config.peer.default_tracker_port;
    match command {
        PeerCommand::Share { path, tracker, port } => {
            let tracker = match resolve_address(&tracker, default_port).await {
                Ok(tracker) => tracker,
                Err(error) => return format!("Cannot resolve tracker {tracker}: {error}"),
            };
            match node.share(Path::new(&path), tracker, port).await {
                Ok(report) => format!("{} (serving on port {})", report.reply, report.serve_port),
                Err(error) => format!("Share failed: {error}"),
            }
        }
        PeerCommand::Get { file_name, tracker, port } => {
            let tracker = match resolve_address(&tracker, default_port).await {
                Ok(tracker) => tracker,
                Err(error) => return format!("Cannot resolve tracker {tracker}: {error}"),
            };
            match node.get(&file_name, tracker, port).await {
                Ok(DownloadOutcome::NotFound) => "File not found on network".to_string(),
                Ok(DownloadOutcome::Completed(report)) => format!(
                    "Downloaded {} ({} bytes) from {}, now serving it on port {}",
                    report.file_name, report.bytes, report.holder, report.serve_port
                ),
                Err(error) => format!("Download of {file_name} failed: {error}"),
            }
        }
        PeerCommand::Status => {
            let mut lines: Vec<String> = node.uploads.listeners().into_iter()
                .map(|(port, file_name)| format!("port {port}: {file_name}"))
                .collect();
            lines.extend(node.uploads.active_uploads().into_iter().map(|upload| {
                format!("uploading {} to {}: {}/{} bytes", upload.file_name, upload.remote, upload.sent, upload.total)
            }));
            if lines.is_empty() {
                "Nothing shared yet".to_string()
            } else {
                lines.join("\n")
            }
        }
        PeerCommand::Quit => String::new(),
    }
}
