pub mod federation_reply;
pub mod federation_server;
pub mod file_tracker;
pub mod tracker_address_book;
