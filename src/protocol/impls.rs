pub mod ack_outcome;
pub mod download_ack;
pub mod file_query;
pub mod request;
pub mod share_request;
pub mod tracker_reply;
