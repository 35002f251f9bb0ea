//! CDN and cache adjustments to a base latency figure

use crate::cdn::CdnProvider;
use crate::options::LatencyOptions;

/// Floor for any total latency (ms); invariant, not an incidental clamp
pub const MIN_TOTAL_LATENCY_MS: f64 = 1.0;

/// Single-hop projection of [`LatencyOptions`]
///
/// Cannot carry multi-service state, which is what lets the chain
/// aggregator call back into the pairwise computation without any risk of
/// recursive chain expansion.
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeOptions {
    pub cdn: Option<CdnProvider>,
    pub cache: Option<CachePolicy>,
}

/// Cache behavior for a single hop
#[derive(Debug, Clone, Copy)]
pub(crate) struct CachePolicy {
    pub hit_ratio: f64,
    pub cache_latency_ms: f64,
}

impl EdgeOptions {
    /// Project the edge-relevant fields out of full options
    ///
    /// Unknown CDN identifiers are ignored, not rejected.
    pub fn from_options(options: &LatencyOptions) -> Self {
        let cdn = match options.cdn.as_deref() {
            Some(id) => {
                let parsed = CdnProvider::parse(id);
                if parsed.is_none() {
                    tracing::debug!("ignoring unknown CDN provider: {id}");
                }
                parsed
            }
            None => None,
        };
        let cache = options.caching.then_some(CachePolicy {
            hit_ratio: options.cache_hit_ratio,
            cache_latency_ms: options.cache_latency_ms,
        });
        Self { cdn, cache }
    }
}

/// Adjustments applied to one base latency figure
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Adjustments {
    /// CDN impact in ms, always <= 0
    pub cdn_impact_ms: f64,
    /// Cache impact in ms, negative when the cache helps
    pub cache_impact_ms: f64,
    /// Floored total in ms
    pub total_ms: f64,
    pub cdn_applied: bool,
    pub cache_applied: bool,
}

/// Apply CDN and cache adjustments to a base latency
pub(crate) fn apply(base_ms: f64, edge: &EdgeOptions) -> Adjustments {
    let mut adj = Adjustments::default();

    if let Some(provider) = edge.cdn {
        adj.cdn_impact_ms = -base_ms * provider.reduction_fraction();
        adj.cdn_applied = true;
    }

    if let Some(cache) = edge.cache {
        let blended =
            cache.hit_ratio * cache.cache_latency_ms + (1.0 - cache.hit_ratio) * base_ms;
        adj.cache_impact_ms = blended - base_ms;
        adj.cache_applied = true;
    }

    adj.total_ms = (base_ms + adj.cdn_impact_ms + adj.cache_impact_ms).max(MIN_TOTAL_LATENCY_MS);
    adj
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_adjustments() {
        let adj = apply(80.0, &EdgeOptions::default());
        assert_eq!(adj.total_ms, 80.0);
        assert_eq!(adj.cdn_impact_ms, 0.0);
        assert_eq!(adj.cache_impact_ms, 0.0);
        assert!(!adj.cdn_applied && !adj.cache_applied);
    }

    #[test]
    fn test_cdn_reduces() {
        let edge = EdgeOptions {
            cdn: Some(CdnProvider::Cloudflare),
            cache: None,
        };
        let adj = apply(100.0, &edge);
        assert!((adj.cdn_impact_ms + 40.0).abs() < 1e-9);
        assert!((adj.total_ms - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_cache_blend() {
        let edge = EdgeOptions {
            cdn: None,
            cache: Some(CachePolicy {
                hit_ratio: 0.7,
                cache_latency_ms: 2.0,
            }),
        };
        let adj = apply(100.0, &edge);
        // blended = 0.7*2 + 0.3*100 = 31.4
        assert!((adj.cache_impact_ms + 68.6).abs() < 1e-9);
        assert!((adj.total_ms - 31.4).abs() < 1e-9);
    }

    #[test]
    fn test_total_floor() {
        let edge = EdgeOptions {
            cdn: Some(CdnProvider::Fastly),
            cache: Some(CachePolicy {
                hit_ratio: 1.0,
                cache_latency_ms: 0.1,
            }),
        };
        let adj = apply(2.0, &edge);
        assert_eq!(adj.total_ms, MIN_TOTAL_LATENCY_MS);
    }

    #[test]
    fn test_unknown_cdn_projected_away() {
        let opts = crate::LatencyOptions::default().with_cdn("my-own-cdn");
        let edge = EdgeOptions::from_options(&opts);
        assert!(edge.cdn.is_none());
    }
}
