#[cfg(test)]
mod common_tests {
    use std::time::{Duration, Instant};
    use tokio::sync::watch;
    use crate::common::common::{resolve_address, shutdown_waiting};

    #[tokio::test]
    async fn test_resolve_address_with_and_without_port() {
        let explicit = resolve_address("127.0.0.1:7000", 6881).await.unwrap();
        assert_eq!(explicit.port(), 7000);
        let defaulted = resolve_address("127.0.0.1", 6881).await.unwrap();
        assert_eq!(defaulted, "127.0.0.1:6881".parse().unwrap());
        let named = resolve_address("localhost", 6881).await.unwrap();
        assert_eq!(named.port(), 6881);
    }

    #[tokio::test]
    async fn test_shutdown_waiting_interrupts_sleep() {
        let (tx, mut rx) = watch::channel(false);
        let started = Instant::now();
        let waiter = tokio::spawn(async move { shutdown_waiting(Duration::from_secs(30), &mut rx).await });
        tokio::time::sleep(Duration::from_millis(50)).await;
        tx.send(true).unwrap();
        assert!(waiter.await.unwrap());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_shutdown_waiting_times_out_without_signal() {
        let (_tx, mut rx) = watch::channel(false);
        assert!(!shutdown_waiting(Duration::from_millis(20), &mut rx).await);
    }
}
