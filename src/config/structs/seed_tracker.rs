use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedTracker {
    pub membership_address: String,
    pub lookup_address: String,
}
