use parking_lot::{Mutex, RwLock};

/// Lookup addresses of other trackers. Grows only.
#[derive(Debug, Default)]
pub struct TrackerAddressBook {
    pub(crate) addresses: Mutex<Vec<String>>,
    /// This tracker's own advertised lookup address, never stored as a peer tracker.
    pub(crate) own_address: RwLock<Option<String>>,
}
