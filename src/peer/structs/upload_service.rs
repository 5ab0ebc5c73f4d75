use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::sync::Semaphore;
use crate::peer::structs::local_share_table::LocalShareTable;
use crate::peer::structs::port_bindings::PortBindings;
use crate::peer::structs::serve_listener::ServeListener;
use crate::transfer::structs::transfer_progress::TransferProgress;

#[derive(Debug)]
pub struct UploadService {
    pub shares: Arc<LocalShareTable>,
    pub bindings: Arc<PortBindings>,
    pub(crate) listeners: Mutex<BTreeMap<u16, ServeListener>>,
    pub(crate) workers: Arc<Semaphore>,
    pub(crate) active: Mutex<Vec<Arc<TransferProgress>>>,
    pub buffer_size: usize,
    pub max_listeners: usize,
    pub transfer_timeout: Duration,
}
