use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::peer_record::PeerRecord;

#[derive(Debug, Default)]
pub struct PeerRegistry {
    pub(crate) peers: RwLock<BTreeMap<PeerKey, PeerRecord>>,
}
