//! Region Registry
//!
//! Read-only registry mapping region codes to coordinates, display names
//! and the hosting providers present there. Built once at startup and
//! shared by reference; no mutation after construction.

use crate::continents::Continent;
use archsim_common::{ArchsimError, ArchsimResult, HostingProvider};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geographic region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Region code (e.g., us-east)
    pub code: String,
    /// Display name
    pub name: String,
    /// Continent
    pub continent: Continent,
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Hosting providers present in this region
    pub providers: Vec<HostingProvider>,
}

impl Region {
    /// Create new region
    pub fn new(code: &str, name: &str, continent: Continent, lat: f64, lon: f64) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            continent,
            latitude: lat,
            longitude: lon,
            providers: Vec::new(),
        }
    }

    /// Set hosting providers
    pub fn with_providers(mut self, providers: Vec<HostingProvider>) -> Self {
        self.providers = providers;
        self
    }
}

/// Read-only region registry
#[derive(Debug, Clone)]
pub struct GeoIndex {
    regions: HashMap<String, Region>,
}

impl GeoIndex {
    /// Registry with the built-in region vocabulary
    pub fn new() -> Self {
        let regions = default_regions()
            .into_iter()
            .map(|r| (r.code.clone(), r))
            .collect();
        Self { regions }
    }

    /// Registry from a custom region vocabulary
    pub fn with_regions(regions: Vec<Region>) -> ArchsimResult<Self> {
        let mut map = HashMap::with_capacity(regions.len());
        for region in regions {
            if map.contains_key(&region.code) {
                return Err(ArchsimError::DuplicateRegion(region.code));
            }
            map.insert(region.code.clone(), region);
        }
        Ok(Self { regions: map })
    }

    /// Look up a region by code
    pub fn get(&self, code: &str) -> Option<&Region> {
        self.regions.get(code)
    }

    /// Whether a region code is known
    pub fn contains(&self, code: &str) -> bool {
        self.regions.contains_key(code)
    }

    /// Display name for a code, "Unknown" when absent
    pub fn display_name(&self, code: &str) -> String {
        self.regions
            .get(code)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Whether a hosting provider is present in a region
    pub fn has_provider(&self, code: &str, provider: HostingProvider) -> bool {
        self.regions
            .get(code)
            .map(|r| r.providers.contains(&provider))
            .unwrap_or(false)
    }

    /// All known region codes
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(|c| c.as_str())
    }

    /// Number of registered regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for GeoIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in region vocabulary
///
/// Codes must agree with the descriptor validator's region list so that
/// its "unknown region" warnings and the fallback estimator stay
/// consistent.
pub fn default_regions() -> Vec<Region> {
    use HostingProvider::*;
    vec![
        Region::new("us-east", "US East (N. Virginia)", Continent::NorthAmerica, 38.7, -77.5)
            .with_providers(vec![Aws, Gcp, Azure, DigitalOcean, Linode]),
        Region::new("us-west", "US West (N. California)", Continent::NorthAmerica, 37.4, -122.1)
            .with_providers(vec![Aws, Gcp, Azure, DigitalOcean, Linode]),
        Region::new("canada-central", "Canada (Montreal)", Continent::NorthAmerica, 45.5, -73.6)
            .with_providers(vec![Aws, Gcp, Azure]),
        Region::new("eu-west", "EU West (Ireland)", Continent::Europe, 53.3, -6.3)
            .with_providers(vec![Aws, Gcp, Azure, DigitalOcean]),
        Region::new("eu-central", "EU Central (Frankfurt)", Continent::Europe, 50.1, 8.7)
            .with_providers(vec![Aws, Gcp, Azure, DigitalOcean, Hetzner]),
        Region::new("asia-pacific", "Asia Pacific (Singapore)", Continent::Asia, 1.35, 103.82)
            .with_providers(vec![Aws, Gcp, Azure, DigitalOcean, Linode]),
        Region::new("asia-northeast", "Asia Northeast (Tokyo)", Continent::Asia, 35.68, 139.69)
            .with_providers(vec![Aws, Gcp, Azure, Linode]),
        Region::new("asia-south", "Asia South (Mumbai)", Continent::Asia, 19.08, 72.88)
            .with_providers(vec![Aws, Gcp, Azure, DigitalOcean]),
        Region::new("south-america", "South America (Sao Paulo)", Continent::SouthAmerica, -23.55, -46.63)
            .with_providers(vec![Aws, Gcp, Azure]),
        Region::new("australia", "Australia (Sydney)", Continent::Oceania, -33.87, 151.21)
            .with_providers(vec![Aws, Gcp, Azure, DigitalOcean]),
        Region::new("africa", "Africa (Cape Town)", Continent::Africa, -33.92, 18.42)
            .with_providers(vec![Aws, Azure]),
    ]
}
