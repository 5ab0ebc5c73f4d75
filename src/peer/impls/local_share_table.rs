use std::path::{Path, PathBuf};
use crate::peer::structs::local_share_table::LocalShareTable;

impl LocalShareTable {
    pub fn new() -> LocalShareTable {
        LocalShareTable::default()
    }

    /// Returns the previous path when the name was already shared.
    pub fn insert(&self, file_name: &str, path: &Path) -> Option<PathBuf>
    {
        self.files.write().insert(file_name.to_string(), path.to_path_buf())
    }

    /// Records `path` under `file_name` unless the name already belongs to a
    /// different path, which is returned instead. `Ok(true)` means the entry is new.
    pub fn claim(&self, file_name: &str, path: &Path) -> Result<bool, PathBuf>
    {
        let mut files = self.files.write();
        match files.get(file_name) {
            Some(existing) if existing != path => Err(existing.clone()),
            Some(_) => Ok(false),
            None => {
                files.insert(file_name.to_string(), path.to_path_buf());
                Ok(true)
            }
        }
    }

    pub fn remove(&self, file_name: &str) -> Option<PathBuf>
    {
        self.files.write().remove(file_name)
    }

    pub fn get(&self, file_name: &str) -> Option<PathBuf>
    {
        self.files.read().get(file_name).cloned()
    }

    pub fn contains(&self, file_name: &str) -> bool
    {
        self.files.read().contains_key(file_name)
    }

    pub fn names(&self) -> Vec<String>
    {
        self.files.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize
    {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.files.read().is_empty()
    }
}
