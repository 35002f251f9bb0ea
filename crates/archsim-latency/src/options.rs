//! Latency estimation options

use serde::{Deserialize, Serialize};

/// Default cache hit ratio when caching is enabled
pub const DEFAULT_CACHE_HIT_RATIO: f64 = 0.7;

/// Default latency served from cache (ms)
pub const DEFAULT_CACHE_LATENCY_MS: f64 = 2.0;

/// Default call frequency for a service hop
pub const DEFAULT_CALL_FREQUENCY: f64 = 1.0;

/// One service in an inter-service call chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHop {
    /// Deployment region of the service
    pub region: String,
    /// Calls per request to the next service in the chain
    #[serde(default = "default_call_frequency")]
    pub call_frequency: f64,
}

fn default_call_frequency() -> f64 {
    DEFAULT_CALL_FREQUENCY
}

impl ServiceHop {
    /// Hop with the default call frequency
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            call_frequency: DEFAULT_CALL_FREQUENCY,
        }
    }

    /// Set call frequency
    pub fn with_call_frequency(mut self, calls: f64) -> Self {
        self.call_frequency = calls;
        self
    }
}

/// Options for a latency estimate
///
/// Every field is optional in the descriptor sense: the defaults describe
/// a plain deployment with no CDN, no cache and a single service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyOptions {
    /// CDN provider identifier, if fronted by a CDN
    pub cdn: Option<String>,
    /// Whether response caching is enabled
    pub caching: bool,
    /// Cache hit ratio in [0,1] (default 0.7)
    pub cache_hit_ratio: f64,
    /// Latency of a cache hit in ms (default 2.0)
    pub cache_latency_ms: f64,
    /// Whether the architecture is a multi-service chain
    pub multi_service: bool,
    /// Ordered service chain, evaluated over adjacent pairs
    pub services: Vec<ServiceHop>,
}

impl Default for LatencyOptions {
    fn default() -> Self {
        Self {
            cdn: None,
            caching: false,
            cache_hit_ratio: DEFAULT_CACHE_HIT_RATIO,
            cache_latency_ms: DEFAULT_CACHE_LATENCY_MS,
            multi_service: false,
            services: Vec::new(),
        }
    }
}

impl LatencyOptions {
    /// Front the deployment with a CDN
    pub fn with_cdn(mut self, provider: &str) -> Self {
        self.cdn = Some(provider.to_string());
        self
    }

    /// Enable response caching with the default hit ratio
    pub fn with_caching(mut self) -> Self {
        self.caching = true;
        self
    }

    /// Set the cache hit ratio
    pub fn with_cache_hit_ratio(mut self, ratio: f64) -> Self {
        self.cache_hit_ratio = ratio;
        self
    }

    /// Set the cache-hit latency in ms
    pub fn with_cache_latency_ms(mut self, ms: f64) -> Self {
        self.cache_latency_ms = ms;
        self
    }

    /// Enable multi-service mode with the given chain
    pub fn with_services(mut self, services: Vec<ServiceHop>) -> Self {
        self.multi_service = true;
        self.services = services;
        self
    }
}
