pub mod file_tracker;
pub mod file_tracker_handlers;
pub mod peer_key;
pub mod peer_record;
pub mod peer_registry;
