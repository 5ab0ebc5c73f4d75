pub mod download_outcome;
pub mod peer_command;
pub mod peer_error;
