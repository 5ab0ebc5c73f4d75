pub mod federation_error;
pub mod federation_reply;
