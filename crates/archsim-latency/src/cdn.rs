//! CDN provider catalog
//!
//! Each provider carries a fixed fraction by which edge caching reduces
//! the base latency. Unknown identifiers parse to `None` and the engine
//! applies no adjustment for them.

use serde::{Deserialize, Serialize};

/// Supported CDN providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CdnProvider {
    /// Cloudflare
    Cloudflare,
    /// Amazon CloudFront
    Cloudfront,
    /// Fastly
    Fastly,
    /// Akamai
    Akamai,
    /// bunny.net
    Bunny,
}

impl CdnProvider {
    /// Fraction of base latency removed by this provider's edge network
    pub fn reduction_fraction(&self) -> f64 {
        match self {
            Self::Cloudflare => 0.40,
            Self::Cloudfront => 0.35,
            Self::Fastly => 0.40,
            Self::Akamai => 0.30,
            Self::Bunny => 0.25,
        }
    }

    /// Canonical identifier used in architecture descriptors
    pub fn id(&self) -> &'static str {
        match self {
            Self::Cloudflare => "cloudflare",
            Self::Cloudfront => "cloudfront",
            Self::Fastly => "fastly",
            Self::Akamai => "akamai",
            Self::Bunny => "bunny",
        }
    }

    /// Parse a descriptor identifier
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "cloudflare" => Some(Self::Cloudflare),
            "cloudfront" => Some(Self::Cloudfront),
            "fastly" => Some(Self::Fastly),
            "akamai" => Some(Self::Akamai),
            "bunny" => Some(Self::Bunny),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_fractions_in_range() {
        for p in [
            CdnProvider::Cloudflare,
            CdnProvider::Cloudfront,
            CdnProvider::Fastly,
            CdnProvider::Akamai,
            CdnProvider::Bunny,
        ] {
            let f = p.reduction_fraction();
            assert!((0.25..=0.40).contains(&f), "{:?} fraction {f}", p);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(CdnProvider::parse("fastly"), Some(CdnProvider::Fastly));
        assert_eq!(CdnProvider::parse("my-own-cdn"), None);
    }
}
