use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use crate::tracker::structs::file_tracker::FileTracker;

#[derive(Debug)]
pub struct FederationServer {
    pub(crate) membership: TcpListener,
    pub(crate) lookup: TcpListener,
    pub(crate) tracker: Arc<FileTracker>,
    pub(crate) connections: Arc<Semaphore>,
}
