use std::collections::BTreeMap;
use std::path::PathBuf;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct LocalShareTable {
    pub(crate) files: RwLock<BTreeMap<String, PathBuf>>,
}
