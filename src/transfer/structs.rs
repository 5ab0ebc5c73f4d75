pub mod transfer_progress;
