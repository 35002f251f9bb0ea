//! ArchSim Common - Shared types for the architecture estimation engine
//!
//! This crate provides the vocabulary shared by the estimation crates:
//! - Error handling
//! - Hosting provider identifiers

#![warn(missing_docs)]

pub mod error;
pub mod provider;

pub use error::*;
pub use provider::*;
