pub mod download_orchestrator;
pub mod local_share_table;
pub mod peer_command;
pub mod peer_node;
pub mod ping_responder;
pub mod port_bindings;
pub mod tracker_client;
pub mod upload_service;
