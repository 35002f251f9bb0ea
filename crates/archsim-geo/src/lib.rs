//! ArchSim Geo - Geographic foundation for latency estimation
//!
//! Provides the read-only region registry, the great-circle distance and
//! base-latency derivation, and the continent-bucket fallback used when a
//! region has no coordinates.

#![warn(missing_docs)]

pub mod continents;
pub mod distance;
pub mod regions;

pub use continents::{Continent, FallbackEstimator};
pub use distance::{base_latency_ms, haversine_km, SAME_REGION_RTT_MS};
pub use regions::{default_regions, GeoIndex, Region};
