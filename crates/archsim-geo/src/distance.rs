//! Great-circle distance and base latency derivation
//!
//! Models round-trip latency from physical distance: propagation delay at
//! an effective 200,000 km/s through fiber, inflated by routing,
//! processing and congestion factors, plus a fixed last-mile addition,
//! doubled for the round trip.

use crate::Region;

/// Earth radius in km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Effective propagation speed through fiber (km/s)
pub const PROPAGATION_KM_PER_S: f64 = 200_000.0;

/// Routing inefficiency factor (paths are not great circles)
pub const ROUTING_INEFFICIENCY: f64 = 1.3;

/// Per-hop processing factor
pub const PROCESSING_FACTOR: f64 = 1.2;

/// Congestion factor
pub const CONGESTION_FACTOR: f64 = 1.1;

/// Fixed last-mile addition (ms, one way)
pub const LAST_MILE_MS: f64 = 5.0;

/// Fixed round-trip latency within a single region (ms)
pub const SAME_REGION_RTT_MS: f64 = 2.0;

/// Great-circle distance between two regions in km
pub fn haversine_km(a: &Region, b: &Region) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Base round-trip latency in ms for a great-circle distance
#[inline]
pub fn base_latency_ms(distance_km: f64) -> f64 {
    let propagation_ms = distance_km / PROPAGATION_KM_PER_S * 1000.0;
    let one_way =
        propagation_ms * ROUTING_INEFFICIENCY * PROCESSING_FACTOR * CONGESTION_FACTOR
            + LAST_MILE_MS;
    one_way * 2.0
}
