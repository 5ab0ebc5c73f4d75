use std::collections::BTreeMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use parking_lot::Mutex;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{watch, Semaphore};
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::local_share_table::LocalShareTable;
use crate::peer::structs::port_bindings::PortBindings;
use crate::peer::structs::serve_listener::ServeListener;
use crate::peer::structs::serve_port::ServePort;
use crate::peer::structs::upload_service::UploadService;
use crate::peer::structs::upload_snapshot::UploadSnapshot;
use crate::protocol::protocol::FILE_NOT_FOUND;
use crate::transfer::structs::transfer_progress::TransferProgress;
use crate::transfer::transfer::{read_file_name, send_error, send_file};

impl UploadService {
    pub fn new(shares: Arc<LocalShareTable>, upload_workers: usize, buffer_size: usize, max_listeners: usize, transfer_timeout: Duration) -> UploadService
    {
        UploadService {
            shares,
            bindings: Arc::new(PortBindings::new()),
            listeners: Mutex::new(BTreeMap::new()),
            workers: Arc::new(Semaphore::new(upload_workers.max(1))),
            active: Mutex::new(Vec::new()),
            buffer_size,
            max_listeners,
            transfer_timeout,
        }
    }

    /// Starts a listener on `ip:port` (port 0 picks one) that serves only
    /// `file_name`. A file that already has a listener keeps its port.
    pub fn start_listener(self: &Arc<Self>, ip: IpAddr, port: u16, file_name: &str) -> Result<ServePort, PeerError>
    {
        let mut listeners = self.listeners.lock();
        if let Some(existing) = self.bindings.port_for(file_name) {
            debug!("[UPLOAD] {file_name} is already served on port {existing}");
            return Ok(ServePort { port: existing, created: false });
        }
        if listeners.len() >= self.max_listeners {
            return Err(PeerError::ListenerLimit(self.max_listeners));
        }

        let std_listener = std::net::TcpListener::bind(SocketAddr::new(ip, port))?;
        std_listener.set_nonblocking(true)?;
        let listener = TcpListener::from_std(std_listener)?;
        let bound_port = listener.local_addr()?.port();
        self.bindings.bind(bound_port, file_name);

        let (stop, rx) = watch::channel(false);
        let service = self.clone();
        let handle = tokio::spawn(async move {
            service.accept_loop(listener, bound_port, rx).await;
        });
        listeners.insert(bound_port, ServeListener {
            port: bound_port,
            file_name: file_name.to_string(),
            stop,
            handle,
        });
        info!("[UPLOAD] Serving {file_name} on port {bound_port}");
        Ok(ServePort { port: bound_port, created: true })
    }

    pub fn stop_listener(&self, port: u16) -> bool
    {
        let Some(listener) = self.listeners.lock().remove(&port) else {
            return false;
        };
        let _ = listener.stop.send(true);
        listener.handle.abort();
        self.bindings.unbind(port);
        info!("[UPLOAD] Stopped serving {} on port {port}", listener.file_name);
        true
    }

    pub fn stop_all(&self)
    {
        let ports: Vec<u16> = self.listeners.lock().keys().copied().collect();
        for port in ports {
            self.stop_listener(port);
        }
    }

    /// `(port, file)` for every running listener.
    pub fn listeners(&self) -> Vec<(u16, String)>
    {
        self.listeners.lock().values().map(|listener| (listener.port, listener.file_name.clone())).collect()
    }

    pub fn active_uploads(&self) -> Vec<UploadSnapshot>
    {
        self.active.lock().iter().map(|progress| UploadSnapshot {
            file_name: progress.file_name.clone(),
            remote: progress.remote,
            sent: progress.transferred(),
            total: progress.total(),
            elapsed: progress.started.elapsed(),
        }).collect()
    }

    async fn accept_loop(self: Arc<Self>, listener: TcpListener, port: u16, mut rx: watch::Receiver<bool>)
    {
        loop {
            tokio::select! {
                _ = rx.changed() => break,
                accepted = listener.accept() => {
                    match accepted {
                        Ok((mut stream, remote_addr)) => {
                            let service = self.clone();
                            tokio::spawn(async move {
                                // The request is read before a worker is taken, so idle connections hold no permit.
                                let file_name = match tokio::time::timeout(service.transfer_timeout, read_file_name(&mut stream)).await {
                                    Ok(Ok(file_name)) => file_name,
                                    Ok(Err(error)) => {
                                        debug!("[UPLOAD] Unreadable request from {remote_addr}: {error}");
                                        return;
                                    }
                                    Err(_) => {
                                        debug!("[UPLOAD] {remote_addr} sent no request within {:?}", service.transfer_timeout);
                                        return;
                                    }
                                };
                                let Ok(_permit) = service.workers.clone().acquire_owned().await else { return; };
                                match service.serve_connection(stream, remote_addr, port, &file_name).await {
                                    Ok(bytes) => info!("[UPLOAD] Sent {bytes} bytes to {remote_addr} from port {port}"),
                                    Err(PeerError::UploadRefused(reason)) => debug!("[UPLOAD] Refused {remote_addr}: {reason}"),
                                    Err(error) => warn!("[UPLOAD] Upload to {remote_addr} failed: {error}"),
                                }
                            });
                        }
                        Err(error) => warn!("[UPLOAD] Accept on port {port} failed: {error}"),
                    }
                }
            }
        }
        debug!("[UPLOAD] Listener on port {port} closed");
    }

    /// Answers the request for `file_name` received on `port`.
    pub async fn serve_connection(&self, mut stream: TcpStream, remote_addr: SocketAddr, port: u16, file_name: &str) -> Result<u64, PeerError>
    {
        let Some(path) = self.shares.get(file_name) else {
            send_error(&mut stream, FILE_NOT_FOUND).await?;
            return Err(PeerError::UploadRefused(format!("{file_name} is not shared")));
        };
        if !self.bindings.authorizes(port, file_name) {
            let message = format!("File {file_name} is not served on port {port}");
            send_error(&mut stream, &message).await?;
            return Err(PeerError::UploadRefused(message));
        }

        let progress = Arc::new(TransferProgress::new(file_name, remote_addr));
        self.active.lock().push(progress.clone());
        let result = send_file(&mut stream, &path, self.buffer_size, self.transfer_timeout, progress.as_ref()).await;
        self.active.lock().retain(|active| !Arc::ptr_eq(active, &progress));
        Ok(result?)
    }
}
