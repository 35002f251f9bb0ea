//! Population-weighted latency aggregation

use serde::{Deserialize, Serialize};

/// One entry of a geographic user distribution
///
/// The upstream descriptor validator guarantees percentages lie in
/// [0,100] and sum to 100; this engine does not re-validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionShare {
    /// Region code of this user population
    pub region: String,
    /// Share of users in percent
    pub percentage: f64,
}

impl DistributionShare {
    /// New distribution entry
    pub fn new(region: &str, percentage: f64) -> Self {
        Self {
            region: region.to_string(),
            percentage,
        }
    }
}

/// Per-entry record of a weighted aggregation, in input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareBreakdown {
    /// Region code
    pub region: String,
    /// Share of users in percent
    pub percentage: f64,
    /// Full latency for this region (ms)
    pub latency_ms: f64,
    /// Weighted contribution to the expected latency (ms)
    pub contribution_ms: f64,
}

/// Expected latency over a user distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedLatencyResult {
    /// Expected latency, rounded to the nearest ms
    pub weighted_latency_ms: u64,
    /// Per-entry contributions, matching input order
    pub breakdown: Vec<ShareBreakdown>,
}

/// Aggregate per-region latencies into one expected value
///
/// `latency_for` answers the full latency for one region. Malformed
/// percentages (NaN or negative) contribute zero instead of poisoning the
/// sum. An empty distribution is not an error and yields zero.
pub(crate) fn aggregate<F>(shares: &[DistributionShare], mut latency_for: F) -> WeightedLatencyResult
where
    F: FnMut(&str) -> f64,
{
    let mut sum_ms = 0.0;
    let mut breakdown = Vec::with_capacity(shares.len());

    for share in shares {
        let latency_ms = latency_for(&share.region);
        let weight = if share.percentage.is_nan() || share.percentage < 0.0 {
            0.0
        } else {
            share.percentage / 100.0
        };
        let contribution_ms = latency_ms * weight;
        sum_ms += contribution_ms;
        breakdown.push(ShareBreakdown {
            region: share.region.clone(),
            percentage: share.percentage,
            latency_ms,
            contribution_ms,
        });
    }

    WeightedLatencyResult {
        weighted_latency_ms: sum_ms.round() as u64,
        breakdown,
    }
}
