//! Region recommendation types

use serde::{Deserialize, Serialize};

/// A candidate deployment region ranked by expected latency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRecommendation {
    /// Region code
    pub region: String,
    /// Expected latency over the user distribution, rounded ms
    pub weighted_latency_ms: u64,
    /// Display name, "Unknown" when absent from the registry
    pub display_name: String,
}
