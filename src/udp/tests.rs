#[cfg(test)]
mod udp_tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::UdpSocket;
    use crate::config::structs::configuration::Configuration;
    use crate::protocol::protocol::INVALID_COMMAND;
    use crate::tracker::structs::file_tracker::FileTracker;
    use crate::udp::structs::udp_server::UdpServer;

    fn tracker() -> Arc<FileTracker> {
        Arc::new(FileTracker::new(Arc::new(Configuration::init())))
    }

    #[tokio::test]
    async fn test_handle_packet_rejects_garbage() {
        let tracker = tracker();
        let remote: SocketAddr = "127.0.0.1:40000".parse().unwrap();
        let reply = UdpServer::handle_packet(remote, vec![0xff, 0x00, 0x13], tracker.clone()).await;
        assert_eq!(reply, INVALID_COMMAND);
        let reply = UdpServer::handle_packet(remote, b"share only-two".to_vec(), tracker.clone()).await;
        assert_eq!(reply, INVALID_COMMAND);
        assert_eq!(tracker.get_stats().invalid_requests, 2);
        assert!(tracker.registry.is_empty());
    }

    #[tokio::test]
    async fn test_reply_goes_to_source_address() {
        let (_tx, rx) = tokio::sync::watch::channel(false);
        let server = UdpServer::new(tracker(), "127.0.0.1:0".parse().unwrap(), 4, 65_536, 65_536, true).await.unwrap();
        let server_addr = server.local_addr().unwrap();
        tokio::spawn(async move { server.start(rx).await });

        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        client.send_to(b"share notes.txt 127.0.0.1 1 9001 6884", server_addr).await.unwrap();
        let mut buffer = [0u8; 1024];
        let (size, from) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buffer)).await.unwrap().unwrap();
        assert_eq!(from, server_addr);
        assert_eq!(&buffer[..size], b"File shared successfully: notes.txt");

        client.send_to(b"get notes.txt", server_addr).await.unwrap();
        let (size, _) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buffer)).await.unwrap().unwrap();
        assert_eq!(&buffer[..size], b"127.0.0.1:9001");
    }
}
