use async_trait::async_trait;
use crate::tracker::structs::peer_record::PeerRecord;

/// Decides whether a registered peer still answers.
#[async_trait]
pub trait PeerProbe: Send + Sync {
    async fn probe(&self, record: &PeerRecord) -> bool;
}
