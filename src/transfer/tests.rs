#[cfg(test)]
mod transfer_tests {
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;
    use crate::transfer::enums::transfer_error::TransferError;
    use crate::transfer::structs::transfer_progress::TransferProgress;
    use crate::transfer::transfer::{check_file_name, partial_path, read_file_name, receive_file, send_error, send_file, write_file_name, STATUS_OK};

    const STALL: Duration = Duration::from_secs(5);

    fn remote() -> SocketAddr {
        "127.0.0.1:9001".parse().unwrap()
    }

    #[tokio::test]
    async fn test_file_is_copied_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.bin");
        let destination = dir.path().join("copy.bin");
        let content: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&source, &content).unwrap();

        let (mut client, mut server) = tokio::io::duplex(1024);
        let sender_progress = TransferProgress::new("source.bin", remote());
        let receiver_progress = TransferProgress::new("source.bin", remote());
        let (sent, received) = tokio::join!(
            send_file(&mut server, &source, 4096, STALL, &sender_progress),
            receive_file(&mut client, &destination, 4096, &receiver_progress),
        );
        assert_eq!(sent.unwrap(), 10_000);
        assert_eq!(received.unwrap(), 10_000);
        assert_eq!(std::fs::read(&destination).unwrap(), content);
        assert_eq!(sender_progress.percent(), 100);
        assert_eq!(receiver_progress.transferred(), 10_000);
    }

    #[tokio::test]
    async fn test_empty_file_transfers() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("empty");
        std::fs::write(&source, b"").unwrap();
        let destination = dir.path().join("empty-copy");

        let (mut client, mut server) = tokio::io::duplex(64);
        let progress = TransferProgress::new("empty", remote());
        send_file(&mut server, &source, 4096, STALL, &progress).await.unwrap();
        assert_eq!(receive_file(&mut client, &destination, 4096, &progress).await.unwrap(), 0);
        assert_eq!(std::fs::metadata(&destination).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_short_stream_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("partial.bin");
        let (mut client, mut server) = tokio::io::duplex(1024);

        server.write_u8(STATUS_OK).await.unwrap();
        server.write_u64(100).await.unwrap();
        server.write_all(&[7u8; 40]).await.unwrap();
        drop(server);

        let progress = TransferProgress::new("partial.bin", remote());
        let result = receive_file(&mut client, &destination, 16, &progress).await;
        assert!(matches!(result, Err(TransferError::ShortTransfer { expected: 100, received: 40 })));
        assert!(!destination.exists());
        assert!(!partial_path(&destination).exists());
    }

    #[tokio::test]
    async fn test_failed_transfer_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("movie.mp4");
        std::fs::write(&destination, b"already served content").unwrap();
        let (mut client, mut server) = tokio::io::duplex(1024);

        server.write_u8(STATUS_OK).await.unwrap();
        server.write_u64(100).await.unwrap();
        server.write_all(&[1u8; 10]).await.unwrap();
        drop(server);

        let progress = TransferProgress::new("movie.mp4", remote());
        let result = receive_file(&mut client, &destination, 4096, &progress).await;
        assert!(matches!(result, Err(TransferError::ShortTransfer { expected: 100, received: 10 })));
        assert_eq!(std::fs::read(&destination).unwrap(), b"already served content");
        assert!(!partial_path(&destination).exists());
    }

    #[tokio::test]
    async fn test_completed_transfer_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.bin");
        let destination = dir.path().join("movie.mp4");
        std::fs::write(&source, b"fresh").unwrap();
        std::fs::write(&destination, b"stale content").unwrap();

        let (mut client, mut server) = tokio::io::duplex(1024);
        let progress = TransferProgress::new("movie.mp4", remote());
        send_file(&mut server, &source, 4096, STALL, &progress).await.unwrap();
        assert_eq!(receive_file(&mut client, &destination, 4096, &progress).await.unwrap(), 5);
        assert_eq!(std::fs::read(&destination).unwrap(), b"fresh");
        assert!(!partial_path(&destination).exists());
    }

    #[tokio::test]
    async fn test_reader_that_stops_reading_stalls_the_upload() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("big.bin");
        std::fs::write(&source, vec![3u8; 64 * 1024]).unwrap();

        let (_client, mut server) = tokio::io::duplex(64);
        let progress = TransferProgress::new("big.bin", remote());
        let result = send_file(&mut server, &source, 4096, Duration::from_millis(100), &progress).await;
        assert!(matches!(result, Err(TransferError::Stalled(_))));
    }

    #[tokio::test]
    async fn test_error_reply_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("never.bin");
        let (mut client, mut server) = tokio::io::duplex(256);
        send_error(&mut server, "File not found").await.unwrap();

        let progress = TransferProgress::new("never.bin", remote());
        match receive_file(&mut client, &destination, 4096, &progress).await {
            Err(TransferError::Rejected(message)) => assert_eq!(message, "File not found"),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_file_name_frame() {
        let (mut client, mut server) = tokio::io::duplex(256);
        write_file_name(&mut client, "résumé.pdf").await.unwrap();
        assert_eq!(read_file_name(&mut server).await.unwrap(), "résumé.pdf");

        let too_long = "x".repeat(70_000);
        assert!(matches!(write_file_name(&mut client, &too_long).await, Err(TransferError::NameTooLong(70_000))));
    }

    #[test]
    fn test_unsafe_names_are_rejected() {
        assert!(check_file_name("movie.mp4").is_ok());
        for name in ["", ".", "..", "../etc/passwd", "dir/file", "a\\b", "two words.txt"] {
            assert!(check_file_name(name).is_err(), "{name:?} should be rejected");
        }
    }
}
