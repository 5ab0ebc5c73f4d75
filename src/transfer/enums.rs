pub mod transfer_error;
