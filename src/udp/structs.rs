pub mod udp_server;
