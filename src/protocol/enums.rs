pub mod ack_outcome;
pub mod protocol_error;
pub mod request;
pub mod tracker_reply;
