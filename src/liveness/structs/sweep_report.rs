use crate::tracker::structs::peer_key::PeerKey;

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct SweepReport {
    pub probed: usize,
    pub alive: usize,
    pub evicted: Vec<PeerKey>,
}
