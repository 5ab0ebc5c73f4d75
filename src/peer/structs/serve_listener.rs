use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct ServeListener {
    pub port: u16,
    pub file_name: String,
    pub(crate) stop: watch::Sender<bool>,
    pub(crate) handle: JoinHandle<()>,
}
