mod common;

use std::net::SocketAddr;
use filemesh::protocol::protocol::FILE_NOT_FOUND;

#[tokio::test]
async fn test_lookup_is_forwarded_to_known_tracker() {
    let tracker_a = common::start_tracker().await;
    let tracker_b = common::start_tracker().await;

    let reply = tracker_a.tracker.join_federation(&tracker_b.seed).await.unwrap();
    assert!(reply.starts_with("Tracker added: "));
    assert!(tracker_b.tracker.address_book.contains(&tracker_a.seed.lookup_address));

    common::udp_request(tracker_b.udp_addr, "share movie.mp4 127.0.0.1 40000 9001 6884").await;
    assert_eq!(common::udp_request(tracker_a.udp_addr, "get movie.mp4").await, "127.0.0.1:9001");
    assert!(tracker_a.tracker.registry.is_empty());
    assert_eq!(tracker_a.tracker.get_stats().federation_hits, 1);
}

#[tokio::test]
async fn test_unreachable_tracker_yields_not_found() {
    let tracker_a = common::start_tracker().await;
    let tracker_b = common::start_tracker().await;
    tracker_a.tracker.join_federation(&tracker_b.seed).await.unwrap();

    let _ = tracker_b.shutdown.send(true);
    let b_lookup: SocketAddr = tracker_b.seed.lookup_address.parse().unwrap();
    assert!(common::eventually(|| std::net::TcpStream::connect(b_lookup).is_err()).await);

    assert_eq!(common::udp_request(tracker_a.udp_addr, "get movie.mp4").await, FILE_NOT_FOUND);
}

#[tokio::test]
async fn test_positive_answer_reveals_new_trackers() {
    let tracker_a = common::start_tracker().await;
    let tracker_b = common::start_tracker().await;
    let tracker_c = common::start_tracker().await;

    tracker_a.tracker.join_federation(&tracker_b.seed).await.unwrap();
    tracker_c.tracker.join_federation(&tracker_b.seed).await.unwrap();
    assert!(!tracker_a.tracker.address_book.contains(&tracker_c.seed.lookup_address));

    common::udp_request(tracker_b.udp_addr, "share notes.txt 127.0.0.1 40000 9005 6884").await;
    assert_eq!(common::udp_request(tracker_a.udp_addr, "get notes.txt").await, "127.0.0.1:9005");
    assert!(tracker_a.tracker.address_book.contains(&tracker_c.seed.lookup_address));
    assert!(!tracker_a.tracker.address_book.contains(&tracker_a.seed.lookup_address));
}

#[tokio::test]
async fn test_forwarded_lookups_do_not_loop() {
    let tracker_a = common::start_tracker().await;
    let tracker_b = common::start_tracker().await;
    tracker_a.tracker.join_federation(&tracker_b.seed).await.unwrap();
    tracker_b.tracker.join_federation(&tracker_a.seed).await.unwrap();

    assert_eq!(common::udp_request(tracker_a.udp_addr, "get ghost.bin").await, FILE_NOT_FOUND);
    assert_eq!(tracker_a.tracker.get_stats().lookups_served, 0);
    assert_eq!(tracker_b.tracker.get_stats().lookups_served, 1);
    assert_eq!(tracker_b.tracker.get_stats().lookups_forwarded, 0);
}
