#![allow(dead_code)]
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use filemesh::config::structs::configuration::Configuration;
use filemesh::config::structs::seed_tracker::SeedTracker;
use filemesh::federation::structs::federation_server::FederationServer;
use filemesh::peer::peer::ping_service;
use filemesh::peer::structs::peer_node::PeerNode;
use filemesh::tracker::structs::file_tracker::FileTracker;
use filemesh::udp::udp::udp_service;

pub type TestConfig = Arc<Configuration>;

pub struct TestTracker {
    pub tracker: Arc<FileTracker>,
    pub udp_addr: SocketAddr,
    pub seed: SeedTracker,
    pub shutdown: watch::Sender<bool>,
}

pub struct TestPeer {
    pub node: Arc<PeerNode>,
    pub ping_addr: SocketAddr,
    pub shutdown: watch::Sender<bool>,
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.tracker.udp_bind_address = "127.0.0.1:0".to_string();
    config.tracker.recv_buffer_size = 65_536;
    config.tracker.send_buffer_size = 65_536;
    config.federation.membership_bind_address = "127.0.0.1:0".to_string();
    config.federation.lookup_bind_address = "127.0.0.1:0".to_string();
    config.federation.connect_timeout_ms = 500;
    config.liveness.probe_timeout_ms = 200;
    config.peer.ping_bind_address = "127.0.0.1:0".to_string();
    config.peer.tracker_timeout_ms = 2000;
    config.peer.query_timeout_ms = 2000;
    config.peer.transfer_timeout_ms = 1000;
    config
}

pub async fn start_tracker() -> TestTracker {
    let config: TestConfig = Arc::new(create_test_config());
    let tracker = Arc::new(FileTracker::new(config.clone()));
    let (shutdown, rx) = watch::channel(false);

    let (udp_addr, _) = udp_service(tracker.clone(), rx.clone()).await.unwrap();
    let federation = FederationServer::new(
        tracker.clone(),
        &config.federation.membership_bind_address,
        &config.federation.lookup_bind_address,
        config.federation.max_connections,
    ).await.unwrap();
    let seed = SeedTracker {
        membership_address: federation.membership_addr().unwrap().to_string(),
        lookup_address: federation.lookup_addr().unwrap().to_string(),
    };
    federation.start(rx);

    TestTracker { tracker, udp_addr, seed, shutdown }
}

pub async fn start_peer(download_dir: &Path) -> TestPeer {
    let mut config = create_test_config();
    config.peer.download_dir = download_dir.to_string_lossy().into_owned();
    let config: TestConfig = Arc::new(config);
    let (shutdown, rx) = watch::channel(false);

    let (ping_addr, _) = ping_service(config.peer.ping_bind_address.parse().unwrap(), rx).await.unwrap();
    let node = Arc::new(PeerNode::new(config, ping_addr.ip(), ping_addr.port()));
    TestPeer { node, ping_addr, shutdown }
}

/// Sends one datagram and returns the reply text.
pub async fn udp_request(tracker: SocketAddr, message: &str) -> String {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(message.as_bytes(), tracker).await.unwrap();
    let mut buffer = [0u8; 1024];
    let (size, _) = tokio::time::timeout(Duration::from_secs(3), socket.recv_from(&mut buffer)).await
        .expect("tracker did not reply")
        .unwrap();
    String::from_utf8_lossy(&buffer[..size]).into_owned()
}

/// Polls `check` until it holds or two seconds pass.
pub async fn eventually<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..40 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    check()
}

/// File content that is not a repeated byte, so offsets matter.
pub fn patterned_bytes(length: usize) -> Vec<u8> {
    (0..length).map(|i| ((i * 31 + i / 251) % 256) as u8).collect()
}
