//! Hosting Provider Definitions

use serde::{Deserialize, Serialize};

/// Supported hosting providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HostingProvider {
    // Tier 1 - Full featured
    /// Amazon Web Services
    Aws,
    /// Google Cloud Platform
    Gcp,
    /// Microsoft Azure
    Azure,

    // Tier 2 - Cost-optimized
    /// DigitalOcean
    DigitalOcean,
    /// Akamai Linode
    Linode,
    /// Hetzner
    Hetzner,
}

impl HostingProvider {
    /// Get tier
    pub fn tier(&self) -> ProviderTier {
        match self {
            Self::Aws | Self::Gcp | Self::Azure => ProviderTier::Tier1,
            Self::DigitalOcean | Self::Linode | Self::Hetzner => ProviderTier::Tier2,
        }
    }

    /// Canonical identifier used in architecture descriptors
    pub fn id(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
            Self::DigitalOcean => "digitalocean",
            Self::Linode => "linode",
            Self::Hetzner => "hetzner",
        }
    }

    /// Parse a descriptor identifier
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "aws" => Some(Self::Aws),
            "gcp" => Some(Self::Gcp),
            "azure" => Some(Self::Azure),
            "digitalocean" => Some(Self::DigitalOcean),
            "linode" => Some(Self::Linode),
            "hetzner" => Some(Self::Hetzner),
            _ => None,
        }
    }
}

/// Provider tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProviderTier {
    /// Hyperscalers
    Tier1,
    /// Cost-optimized clouds
    Tier2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_roundtrip() {
        for p in [
            HostingProvider::Aws,
            HostingProvider::Gcp,
            HostingProvider::Azure,
            HostingProvider::DigitalOcean,
            HostingProvider::Linode,
            HostingProvider::Hetzner,
        ] {
            assert_eq!(HostingProvider::parse(p.id()), Some(p));
        }
        assert_eq!(HostingProvider::parse("not-a-cloud"), None);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(HostingProvider::Aws.tier(), ProviderTier::Tier1);
        assert_eq!(HostingProvider::Hetzner.tier(), ProviderTier::Tier2);
    }
}
