//! Configuration loading and management for the Settlement Engine.
//!
//! This module provides functionality to load statutory configurations from YAML
//! files, including jurisdiction metadata, the year-indexed minimum wage and
//! transport allowance table, and the benefit accrual constants.
//!
//! # Example
//!
//! ```no_run
//! use settlement_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/colombia").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BenefitRules, JurisdictionMetadata, RateLookup, SeveranceInterestBasis, StatutoryConfig,
    StatutoryRates, StatutoryTable,
};
