#[cfg(test)]
mod tracker_tests {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use crate::config::structs::configuration::Configuration;
    use crate::protocol::enums::ack_outcome::AckOutcome;
    use crate::protocol::protocol::{FILE_NOT_FOUND, SHARE_OK_PREFIX};
    use crate::protocol::structs::download_ack::DownloadAck;
    use crate::protocol::structs::file_query::FileQuery;
    use crate::protocol::structs::share_request::ShareRequest;
    use crate::tracker::structs::file_tracker::FileTracker;
    use crate::tracker::structs::peer_key::PeerKey;
    use crate::tracker::structs::peer_registry::PeerRegistry;

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[test]
    fn test_repeated_share_is_idempotent() {
        let registry = PeerRegistry::new();
        let key = PeerKey::new(ip(1), 9001);
        for _ in 0..5 {
            registry.register(key, ip(1), 40000, 9001, 6884, "movie.mp4");
        }
        assert_eq!(registry.len(), 1);
        let record = registry.get(&key).unwrap();
        assert_eq!(record.shared_files.len(), 1);
        assert!(record.shared_files.contains("movie.mp4"));
    }

    #[test]
    fn test_same_address_different_server_ports_are_distinct() {
        let registry = PeerRegistry::new();
        registry.register(PeerKey::new(ip(1), 9001), ip(1), 40000, 9001, 6884, "a.txt");
        registry.register(PeerKey::new(ip(1), 9002), ip(1), 40001, 9002, 6884, "b.txt");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_holders("a.txt"), vec![SocketAddr::new(ip(1), 9001)]);
        assert_eq!(registry.find_holders("b.txt"), vec![SocketAddr::new(ip(1), 9002)]);
    }

    #[test]
    fn test_lookup_after_register_and_evict() {
        let registry = PeerRegistry::new();
        let key = PeerKey::new(ip(2), 9001);
        registry.register(key, ip(2), 40000, 9001, 6884, "movie.mp4");
        registry.register(PeerKey::new(ip(3), 9001), ip(3), 40000, 9001, 6884, "movie.mp4");
        assert_eq!(registry.find_holders("movie.mp4").len(), 2);

        assert!(registry.evict(&key).is_some());
        let holders = registry.find_holders("movie.mp4");
        assert_eq!(holders, vec![SocketAddr::new(ip(3), 9001)]);
        assert!(registry.evict(&key).is_none());
    }

    #[test]
    fn test_concurrent_registration_merges_into_one_record() {
        let registry = Arc::new(PeerRegistry::new());
        let key = PeerKey::new(ip(4), 9001);
        let handles: Vec<_> = (0..8).map(|thread| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                for file in 0..50 {
                    registry.register(key, ip(4), 40000, 9001, 6884, &format!("file-{}", (thread * 50 + file) % 100));
                }
            })
        }).collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&key).unwrap().shared_files.len(), 100);
    }

    #[test]
    fn test_failed_ack_does_not_register() {
        let registry = PeerRegistry::new();
        let key = PeerKey::new(ip(5), 9100);
        assert!(registry.acknowledge_download(key, ip(5), 40000, 9100, 6884, "movie.mp4", false).is_none());
        assert!(registry.is_empty());
        assert!(registry.acknowledge_download(key, ip(5), 40000, 9100, 6884, "movie.mp4", true).is_some());
        assert_eq!(registry.find_holders("movie.mp4"), vec![SocketAddr::new(ip(5), 9100)]);
    }

    #[test]
    fn test_apply_sweep_refreshes_and_removes() {
        let registry = PeerRegistry::new();
        let alive = PeerKey::new(ip(6), 9001);
        let dead = PeerKey::new(ip(7), 9001);
        registry.register(alive, ip(6), 40000, 9001, 6884, "x");
        registry.register(dead, ip(7), 40000, 9001, 6884, "x");

        let seen_at = Instant::now() + Duration::from_secs(1);
        let removed = registry.apply_sweep(&[alive], &[dead], seen_at);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].key(), dead);
        assert_eq!(registry.get(&alive).unwrap().last_seen, seen_at);
        assert_eq!(registry.find_holders("x"), vec![alive.server_address()]);
    }

    #[tokio::test]
    async fn test_handlers_render_canonical_responses() {
        let tracker = FileTracker::new(Arc::new(Configuration::init()));
        let peer: SocketAddr = "10.0.0.8:40000".parse().unwrap();

        let shared = tracker.handle_share(peer, &ShareRequest {
            file_name: "movie.mp4".to_string(),
            tracker_address: "10.0.0.254".to_string(),
            listen_port: 40000,
            server_port: 9001,
            ping_port: 6884,
        });
        assert_eq!(shared, format!("{SHARE_OK_PREFIX}movie.mp4"));

        let holders = tracker.handle_get(peer, &FileQuery { file_name: "movie.mp4".to_string() }).await;
        assert_eq!(holders, "10.0.0.8:9001");

        let missing = tracker.handle_get(peer, &FileQuery { file_name: "nonexistent.txt".to_string() }).await;
        assert_eq!(missing, FILE_NOT_FOUND);

        let downloader: SocketAddr = "10.0.0.9:41000".parse().unwrap();
        let acked = tracker.handle_ack(downloader, &DownloadAck {
            file_name: "movie.mp4".to_string(),
            server_port: 9100,
            outcome: AckOutcome::Success,
            ping_port: 6886,
        });
        assert_eq!(acked, "10.0.0.9:9100 successfully downloaded movie.mp4");
        assert_eq!(tracker.registry.find_holders("movie.mp4").len(), 2);
        assert_eq!(tracker.get_stats().peers, 2);
    }
}
