pub mod peer_probe;
