mod common;

use filemesh::protocol::protocol::{FILE_NOT_FOUND, INVALID_COMMAND};

#[tokio::test]
async fn test_share_then_get_over_udp() {
    let tracker = common::start_tracker().await;

    let reply = common::udp_request(tracker.udp_addr, "share movie.mp4 127.0.0.1 40000 9001 6884").await;
    assert_eq!(reply, "File shared successfully: movie.mp4");

    // Duplicate datagram must not create a second record.
    common::udp_request(tracker.udp_addr, "share movie.mp4 127.0.0.1 40000 9001 6884").await;
    assert_eq!(tracker.tracker.registry.len(), 1);

    let holders = common::udp_request(tracker.udp_addr, "get movie.mp4").await;
    assert_eq!(holders, "127.0.0.1:9001");
}

#[tokio::test]
async fn test_get_unknown_file_with_empty_federation() {
    let tracker = common::start_tracker().await;
    assert_eq!(common::udp_request(tracker.udp_addr, "get nonexistent.txt").await, FILE_NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_datagrams_keep_the_service_alive() {
    let tracker = common::start_tracker().await;
    for garbage in ["", "share", "ack a b c d", "frobnicate x", "share a b c d e"] {
        assert_eq!(common::udp_request(tracker.udp_addr, garbage).await, INVALID_COMMAND, "{garbage:?}");
    }
    assert_eq!(common::udp_request(tracker.udp_addr, "get still-alive.txt").await, FILE_NOT_FOUND);
    assert_eq!(tracker.tracker.get_stats().invalid_requests, 5);
}

#[tokio::test]
async fn test_ack_registers_only_successful_downloaders() {
    let tracker = common::start_tracker().await;
    common::udp_request(tracker.udp_addr, "share movie.mp4 127.0.0.1 40000 9001 6884").await;

    let failed = common::udp_request(tracker.udp_addr, "ack movie.mp4 9100 failure 6886").await;
    assert_eq!(failed, "127.0.0.1:9100 couldn't download movie.mp4");
    assert_eq!(common::udp_request(tracker.udp_addr, "get movie.mp4").await, "127.0.0.1:9001");

    let done = common::udp_request(tracker.udp_addr, "ack movie.mp4 9100 success 6886").await;
    assert_eq!(done, "127.0.0.1:9100 successfully downloaded movie.mp4");
    assert_eq!(common::udp_request(tracker.udp_addr, "get movie.mp4").await, "127.0.0.1:9001, 127.0.0.1:9100");
}
