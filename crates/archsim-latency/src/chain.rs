//! Inter-service call-chain aggregation
//!
//! Walks adjacent pairs of the service chain (not all pairs). The
//! pairwise figure comes from the caller as a closure over the engine's
//! single-hop computation, which by construction cannot re-enter
//! multi-service mode.

use crate::options::ServiceHop;

/// Latency added when two adjacent services share a region (ms)
pub const SAME_REGION_HOP_MS: f64 = 1.0;

/// Total chain latency in ms
///
/// `pairwise_total` answers the round-trip total between two regions.
/// Chains shorter than two hops contribute nothing.
pub(crate) fn chain_latency_ms<F>(hops: &[ServiceHop], mut pairwise_total: F) -> f64
where
    F: FnMut(&str, &str) -> f64,
{
    hops.windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let per_call = if from.region == to.region {
                SAME_REGION_HOP_MS
            } else {
                pairwise_total(&from.region, &to.region)
            };
            per_call * from.call_frequency
        })
        .sum()
}
