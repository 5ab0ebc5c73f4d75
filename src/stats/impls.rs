pub mod file_tracker;
