use std::collections::BTreeMap;
use parking_lot::RwLock;

/// Each upload port serves exactly one file.
#[derive(Debug, Default)]
pub struct PortBindings {
    pub(crate) ports: RwLock<BTreeMap<u16, String>>,
}
