//! ArchSim Latency - Geographic latency estimation engine
//!
//! Estimates, without deploying anything, the round-trip latency profile
//! of a proposed architecture: deployment region vs. a distributed user
//! population, CDN/cache effects, inter-service call chains, and ranking
//! of candidate regions.
//!
//! # Operations
//!
//! - [`LatencyEstimator::compute_latency`] - one region pair
//! - [`LatencyEstimator::compute_weighted_latency`] - one region against
//!   a user distribution
//! - [`LatencyEstimator::recommend_regions`] - rank candidate regions
//!
//! The engine is a pure function over read-only tables; the upstream
//! descriptor validator owns input validation and the cost engine
//! consumes the results.

#![warn(missing_docs)]

pub mod adjust;
pub mod cdn;
pub mod chain;
pub mod engine;
pub mod options;
pub mod recommend;
pub mod weighted;

pub use adjust::MIN_TOTAL_LATENCY_MS;
pub use cdn::CdnProvider;
pub use engine::{LatencyBreakdown, LatencyEstimator, LatencyMatrix, LatencyResult};
pub use options::{LatencyOptions, ServiceHop};
pub use recommend::RegionRecommendation;
pub use weighted::{DistributionShare, ShareBreakdown, WeightedLatencyResult};
